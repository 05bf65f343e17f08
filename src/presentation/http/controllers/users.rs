// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{
        ChangePasswordCommand, CreateUserCommand, DeleteUserCommand, UpdateUserCommand,
    },
    queries::users::{GetUserQuery, ListUsersQuery, SearchUsersQuery},
};
use crate::presentation::http::controllers::user_requests::{
    ChangePasswordRequest, CreateUserRequest, ListUsersParams, SearchUsersParams,
    UpdateUserRequest, lenient_int,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, UserIdPath};
use crate::presentation::http::response::{MessageResponse, UserListResponse, UserResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created.", body = UserResponse),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::response::ErrorResponse),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<UserResponse>)> {
    let command = CreateUserCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        age: payload.age,
    };

    let user = state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(UserResponse::new(user))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user.", body = UserResponse),
        (status = 400, description = "Invalid user id.", body = crate::presentation::http::response::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    UserIdPath(user_id): UserIdPath,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { user_id })
        .await
        .into_http()
        .map(|user| Json(UserResponse::new(user)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users.", body = UserListResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListUsersParams>,
) -> HttpResult<Json<UserListResponse>> {
    let query = ListUsersQuery {
        search: params.search,
        age_min: lenient_int(params.age_min.as_deref()),
        age_max: lenient_int(params.age_max.as_deref()),
        sort: params.sort,
        order: params.order,
        page: lenient_int(params.page.as_deref()),
        limit: lenient_int(params.limit.as_deref()),
    };

    state
        .services
        .user_queries
        .list_users(query)
        .await
        .into_http()
        .map(|page| Json(UserListResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/search",
    params(SearchUsersParams),
    responses(
        (status = 200, description = "Users whose name or email contains the keyword.", body = UserListResponse),
        (status = 400, description = "Missing keyword.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn search_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchUsersParams>,
) -> HttpResult<Json<UserListResponse>> {
    let query = SearchUsersQuery {
        keyword: params.q.unwrap_or_default(),
        page: lenient_int(params.page.as_deref()),
        limit: lenient_int(params.limit.as_deref()),
    };

    state
        .services
        .user_queries
        .search_users(query)
        .await
        .into_http()
        .map(|page| Json(UserListResponse::from(page)))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated.", body = UserResponse),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::response::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::response::ErrorResponse),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    UserIdPath(user_id): UserIdPath,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> HttpResult<Json<UserResponse>> {
    let command = UpdateUserCommand {
        user_id,
        name: payload.name,
        email: payload.email,
        age: payload.age,
    };

    state
        .services
        .user_commands
        .update_user(command)
        .await
        .into_http()
        .map(|user| Json(UserResponse::new(user)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted.", body = MessageResponse),
        (status = 400, description = "Invalid user id.", body = crate::presentation::http::response::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    UserIdPath(user_id): UserIdPath,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { user_id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::success("user deleted successfully")))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/change-password",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed.", body = MessageResponse),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::response::ErrorResponse),
        (status = 401, description = "Old password is incorrect.", body = crate::presentation::http::response::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn change_password(
    Extension(state): Extension<HttpState>,
    UserIdPath(user_id): UserIdPath,
    JsonBody(payload): JsonBody<ChangePasswordRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = ChangePasswordCommand {
        user_id,
        old_password: payload.old_password,
        new_password: payload.new_password,
    };

    state
        .services
        .user_commands
        .change_password(command)
        .await
        .into_http()?;

    Ok(Json(MessageResponse::success("password changed successfully")))
}
