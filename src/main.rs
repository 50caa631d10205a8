//! Dock Booking Engine HTTP service.
//!
//! Environment:
//! - `DOCK_BOOKING_CONFIG`: policy directory (default `./config/default`)
//! - `DOCK_BOOKING_BIND`: listen address (default `0.0.0.0:8080`)
//! - `RUST_LOG`: log filter (default `info`)

use std::process::ExitCode;

use tracing::{error, info};

use dock_booking_engine::api::{AppState, create_router};
use dock_booking_engine::config::ConfigLoader;
use dock_booking_engine::logging;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config_dir =
        std::env::var("DOCK_BOOKING_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("DOCK_BOOKING_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load booking policy");
            return ExitCode::FAILURE;
        }
    };

    let marina = config.marina();
    info!(
        marina = %marina.name,
        policy_version = %marina.version,
        currency = %marina.currency,
        "Booking policy loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(bind_addr = %bind_addr, "Dock booking engine listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
