//! Confession board API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p confession-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env`.

use anyhow::Context;
use confession_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env early so APP_ENV and RUST_LOG shape logging
    dotenvy::dotenv().ok();

    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(Environment::Development);

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        let cause = format!("{e:#}");
        error!(error = %cause, "Server terminated with an error");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        storage = ?config.storage.backend,
        address = %config.api.address(),
        "Configuration loaded"
    );

    confession_api::server::run(config).await?;

    Ok(())
}
