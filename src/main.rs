//! Taskboard server entry point.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use taskboard::api::routes::create_router;
use taskboard::infrastructure::{
    AppConfig, AppDependencies, PostgresTaskRepository, PostgresUserRepository,
};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Taskboard API...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database connected and migrated");

    let tasks = Arc::new(PostgresTaskRepository::new(pool.clone()));
    let users = Arc::new(PostgresUserRepository::new(pool));
    let dependencies = AppDependencies::new(config, tasks, users);

    let app = create_router(dependencies);

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Taskboard API listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Taskboard API stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,taskboard=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {error}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
