//! # HTTP Server
//!
//! Router assembly and the listening loop for the gateway endpoints.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::ServerConfig;
use super::routes::{gateway_routes, AppState};

/// HTTP server for the authentication gateway
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(state: Arc<AppState>) -> Self {
        Self::with_config(ServerConfig::default(), state)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: ServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the router with CORS and request tracing applied
    fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Use configured origins for production
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(gateway_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();

        tracing::info!(%addr, "gateway listening");
        tracing::info!("endpoints: POST /user/:user/create, POST /auth");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryGateway, TokenConfig, TokenIssuer};

    const PRIVATE_PEM: &str = include_str!("../../tests/fixtures/signing_key.pem");

    fn test_state() -> Arc<AppState> {
        let issuer = TokenIssuer::from_pem(PRIVATE_PEM.as_bytes(), TokenConfig::default()).unwrap();
        Arc::new(AppState::new(Arc::new(MemoryGateway::new()), issuer).unwrap())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(test_state());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = ServerConfig::with_port(9090);
        let server = HttpServer::with_config(config, test_state());
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(test_state());
        let _router = server.router();
        // If we get here, router construction succeeded
    }

    #[test]
    fn test_router_builds_with_origin_allowlist() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config, test_state());
        let _router = server.router();
    }
}
