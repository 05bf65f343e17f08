// src/infrastructure/repositories/mod.rs
mod error;
mod users;

pub use error::map_sqlx;
pub use users::PostgresUserRepository;
