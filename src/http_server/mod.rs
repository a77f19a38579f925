//! # HTTP Server Module
//!
//! Axum server exposing the gateway over HTTP.
//!
//! # Endpoints
//!
//! - `POST /user/:user/create` - register a subject (201, empty body)
//! - `POST /auth` - verify credentials and issue a token (200, `jwt` header)

pub mod config;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use routes::{authenticate_schema, create_subject_schema, gateway_routes, AppState};
pub use server::HttpServer;
