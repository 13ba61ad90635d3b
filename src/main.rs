//! azure-tts-relay - Azure Speech text-to-speech relay
//!
//! Reads its configuration from the environment (and `.env` when present)
//! and serves `GET /` and `POST /tts`.

use azure_tts_relay::utils::logging::init_logging;
use azure_tts_relay::{Config, server};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    if let Ok(path) = dotenvy::dotenv() {
        // Logging is not up yet
        eprintln!("Loaded environment from {}", path.display());
    }

    init_logging();
    info!("azure-tts-relay v{}", azure_tts_relay::VERSION);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
