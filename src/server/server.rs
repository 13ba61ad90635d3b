//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{RelayError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

/// Methods allowed for cross-origin callers
const CORS_METHODS: [&str; 2] = ["GET", "POST"];

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::new(config.clone())?;

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Build the CORS middleware for the configured origin
    fn cors(config: &ServerConfig) -> Cors {
        let cors = if config.allows_all_origins() {
            Cors::default().allow_any_origin()
        } else {
            Cors::default().allowed_origin(&config.cors_origin)
        };

        cors.allowed_methods(CORS_METHODS).allow_any_header()
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = state.config().server().clone();

        App::new()
            .app_data(state)
            .wrap(Self::cors(&server_config))
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "azure-tts-relay")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| RelayError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("Azure TTS proxy listening on :{}", self.config.port);

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
