//! authgate entry point
//!
//! Parses CLI arguments, initializes tracing, loads the signing key, and
//! starts the HTTP server. Startup is fail-fast: a missing or malformed
//! signing key aborts the process before any request is accepted.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use authgate::auth::{MemoryGateway, TokenConfig, TokenIssuer};
use authgate::http_server::{AppState, HttpServer, ServerConfig};

#[derive(Parser)]
#[command(name = "authgate")]
#[command(about = "Schema-validated authentication gateway issuing signed identity tokens")]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Path to the PEM-encoded RSA private key used to sign tokens
    #[arg(long, env = "AUTHGATE_SIGNING_KEY")]
    signing_key: PathBuf,

    /// CORS allowed origin (repeat for several; omit to allow any)
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("authgate=info")),
        )
        .init();

    let cli = Cli::parse();

    let issuer = TokenIssuer::from_pem_file(&cli.signing_key, TokenConfig::default())
        .context("loading signing key")?;
    tracing::info!(path = %cli.signing_key.display(), "signing key loaded");

    let gateway = Arc::new(MemoryGateway::new());
    let state = Arc::new(AppState::new(gateway, issuer).context("preparing endpoint schemas")?);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        cors_origins: cli.cors_origins,
    };

    HttpServer::with_config(config, state).start().await?;

    Ok(())
}
