use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use user_service::{
    application::{
        cache::CacheAside,
        ports::{cache::UserCache, security::PasswordHasher, time::Clock},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::user::UserRepository,
    infrastructure::{
        cache::{NoopUserCache, RedisUserCache},
        database,
        repositories::PostgresUserRepository,
        security::password::Argon2PasswordHasher,
        time::SystemClock,
    },
    init_tracing,
    presentation::http::{
        routes::{RouterOptions, build_router},
        state::HttpState,
    },
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.db_max_connections())
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let user_cache: Arc<dyn UserCache> = match config.redis_url() {
        Some(url) => {
            tracing::info!("user cache enabled");
            Arc::new(RedisUserCache::from_url(url, config.cache_ttl_secs())?)
        }
        None => {
            tracing::info!("no redis configured; user cache disabled");
            Arc::new(NoopUserCache)
        }
    };
    let (cache, cache_writer) = CacheAside::spawn(user_cache, config.cache_settings());

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        password_hasher,
        clock,
        cache.clone(),
    ));

    let state = HttpState {
        services,
        db_pool: pool.clone(),
    };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        request_timeout: config.request_timeout(),
    };
    let app = build_router(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain queued cache work before the writer is torn down.
    cache.flush().await;
    drop(cache);
    cache_writer.abort();
    pool.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
