use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

const CONNECT_ATTEMPTS: u32 = 5;
const RETRY_STEP: Duration = Duration::from_secs(2);

/// Connects with linear back-off (2s, 4s, ...) so the service can start
/// alongside a database that is still coming up.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;
    loop {
        let result = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await;

        match result {
            Ok(pool) => {
                tracing::info!(attempt, "connected to database");
                return Ok(pool);
            }
            Err(err) if attempt < CONNECT_ATTEMPTS => {
                let wait = RETRY_STEP * attempt;
                tracing::warn!(attempt, error = %err, ?wait, "database not ready; retrying");
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
