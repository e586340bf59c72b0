//! # File Share Bot
//!
//! Application entry point. Initializes:
//! - Tracing/logging subsystem
//! - Configuration loading (exits with status 1 on invalid configuration)

use anyhow::Result;
use tracing::{error, info};

use file_share_bot::config::Settings;

fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    file_share_bot::telemetry::init_tracing();

    info!("Starting File Share Bot...");

    // Load configuration from the .env file and environment variables
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            error!("Configuration Error: {err}");
            std::process::exit(1);
        }
    };

    info!(
        config = %serde_json::to_string(&settings)?,
        "Effective configuration"
    );

    Ok(())
}
