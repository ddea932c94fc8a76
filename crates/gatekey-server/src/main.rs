//! Gatekey Server - Token-issuing authentication service

use anyhow::Result;
use chrono::Duration;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod error;
mod password;
mod routes;
mod state;
mod store;

use config::Config;
use gatekey_issue::TokenIssuer;
use gatekey_verify::TokenValidator;
use state::AppState;
use store::UserStore;

/// Gatekey Server - issues and validates access tokens
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Bind address
    #[arg(long, env = "GATEKEY_BIND")]
    bind: Option<String>,

    /// Port
    #[arg(short, long, env = "GATEKEY_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;

    init_logging(&config.logging.level);

    info!("Starting Gatekey Server v{}", env!("CARGO_PKG_VERSION"));

    // Seed the credential store with the built-in accounts
    let store = Arc::new(UserStore::new());
    store
        .seed_defaults()
        .map_err(|e| anyhow::anyhow!("Failed to seed user store: {}", e))?;

    // Key material and TTL are loaded once; issuer and validator share
    // the same secret and stay immutable for the life of the process.
    let ttl = Duration::minutes(config.auth.token_ttl_minutes);
    let issuer = TokenIssuer::new(&config.auth.jwt_secret, ttl);
    let validator = TokenValidator::new(&config.auth.jwt_secret);

    let state = AppState::new(store, issuer, validator);

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let bind_addr = args.bind.unwrap_or(config.server.bind_address);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind_addr, port).parse()?;

    info!("Listening on {}", addr);
    info!("Token TTL: {} minutes", config.auth.token_ttl_minutes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    info!("Shutdown signal received");
}
