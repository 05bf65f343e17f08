// src/presentation/http/openapi.rs
use crate::presentation::http::{
    controllers::{user_requests, users},
    response, routes,
};
use axum::Router;
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    paths(
        users::create_user,
        users::list_users,
        users::search_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        users::change_password,
        routes::health
    ),
    components(
        schemas(
            response::UserResponse,
            response::UserListResponse,
            response::MessageResponse,
            response::ErrorResponse,
            routes::HealthResponse,
            user_requests::CreateUserRequest,
            user_requests::UpdateUserRequest,
            user_requests::ChangePasswordRequest,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "User Service API",
        description = "CRUD service for users with a look-aside cache",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document it renders. `SwaggerUi` registers the
/// JSON route itself.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
