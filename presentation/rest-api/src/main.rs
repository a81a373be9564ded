use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// SmartCart REST API entry point
///
/// - config/: environment driven settings (server, CORS, auth, database)
/// - setup/: dependency wiring and HTTP server
/// - api/: routes, DTOs, error mapping and bearer auth
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let config = AppConfig::from_env()?;
    api::security::init_jwt_secret(config.auth.jwt_secret.clone())?;

    let pool = database_config::init_database().await?;

    let container = DependencyContainer::new(pool);

    Server::run(config, container).await?;

    Ok(())
}
