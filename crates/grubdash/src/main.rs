//! # GrubDash server
//!
//! 1. Parses the configuration ([`Config`])
//! 2. Initializes tracing
//! 3. Starts the order and dish actors ([`RestaurantSystem`])
//! 4. Serves the HTTP API until Ctrl-C, then shuts the actors down

use actor_framework::tracing::setup_tracing;
use clap::Parser;
use grubdash::api::{self, AppState};
use grubdash::config::Config;
use grubdash::lifecycle::RestaurantSystem;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    setup_tracing(&config.log_level);

    let system = RestaurantSystem::new(config.buffer_size);
    let app = api::router(AppState::from_system(&system));

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, "GrubDash API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router and its clients are gone, so the actors can drain and stop
    system.shutdown().await?;
    info!("GrubDash stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Unable to listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
