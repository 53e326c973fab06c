use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use users_service::{app, config::Config, db, types::AppState};

const DEFAULT_LOG_FILTER: &str = "users_service=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // initialize tracing
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let db_pool = db::make_db_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout,
    )
    .context("build database pool")?;

    // The service still comes up when the database is down; /health reports it.
    if let Err(e) = db::run_migrations(&db_pool).await {
        tracing::warn!(error = %e, "migrations failed; continuing");
    }

    let app = app::build_router(AppState {
        db_pool,
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("signal received, starting graceful shutdown"),
        Err(e) => {
            tracing::error!(error = %e, "failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    }
}
