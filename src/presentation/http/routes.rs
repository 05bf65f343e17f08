// src/presentation/http/routes.rs
use crate::infrastructure::database;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{controllers::users, openapi};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::ToSchema;

const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Cross-cutting HTTP settings taken from configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            request_timeout: Duration::from_secs(15),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/v1/users/search", get(users::search_users))
        .route(
            "/api/v1/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/v1/users/{id}/change-password",
            put(users::change_password),
        )
        .layer(timeout_layer(options.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

/// Requests running past `limit` are answered with 408.
fn timeout_layer(limit: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, limit)
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`.
    pub status: String,
    /// `connected` or `disconnected`.
    pub database: String,
    /// `connected` or `disconnected`.
    pub cache: String,
    pub timestamp: DateTime<Utc>,
}

fn probe_label(ok: bool) -> &'static str {
    if ok { "connected" } else { "disconnected" }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database and cache reachable.", body = HealthResponse),
        (status = 503, description = "A dependency is unreachable.", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = matches!(
        timeout(HEALTH_PROBE_TIMEOUT, database::ping(&state.db_pool)).await,
        Ok(Ok(()))
    );
    let cache_ok = state.services.cache().ping().await;

    let healthy = database_ok && cache_ok;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "healthy" } else { "unhealthy" }.into(),
            database: probe_label(database_ok).into(),
            cache: probe_label(cache_ok).into(),
            timestamp: Utc::now(),
        }),
    )
}
