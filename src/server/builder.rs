//! run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Run the server with the given configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting Azure TTS relay");

    let server = HttpServer::new(&config)?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /    - Liveness check");
    info!("   POST /tts - Text to speech");

    server.start().await
}
