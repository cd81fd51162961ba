use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserRepository, UserService};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // In-memory store; clones share the same backing map
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository.clone());

    // Build router with API routes
    let api_routes = api::routes(service);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health and readiness endpoints
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::ready::router(repository));

    info!(
        "Starting {} v{} in {:?} mode",
        config.app.name, config.app.version, config.environment
    );

    // Server with graceful shutdown on SIGINT/SIGTERM
    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
