use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Exits here when MongoDB stays unreachable
    let state = AppState::from_config(config).await?;

    let api_routes = api::routes(&state);

    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    let app = router.merge(health_router(state.config.app));

    info!("Starting Bookshelf API with graceful shutdown (30s cleanup timeout)");

    let mongo = state.mongo.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(mongo) = mongo {
                info!("Shutting down: closing MongoDB connections");
                mongo.client.shutdown().await;
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Bookshelf API shutdown complete");
    Ok(())
}
