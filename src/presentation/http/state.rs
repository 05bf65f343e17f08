// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Only used by the health probe; data access goes through the services.
    pub db_pool: PgPool,
}
