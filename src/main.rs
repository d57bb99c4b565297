//! Stock Predictor API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ ┌──────────┐    ┌──────────────┐    ┌───────────────┐
//!                     │   http   │───▶│   routing    │───▶│    stocks     │
//!                     │  server  │    │ route table  │    │   registry    │
//!     Client Response └──────────┘    └──────┬───────┘    └───────────────┘
//!     ◀───────────────────────────────────────┘ api (JSON bodies, errors)
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

use stock_predictor_api::config::{self, ApiConfig};
use stock_predictor_api::lifecycle::{signals, startup, Shutdown};
use stock_predictor_api::observability::logging;

#[derive(Parser)]
#[command(name = "stock-predictor-api")]
#[command(about = "Mock defense-sector stock API", long_about = None)]
struct Args {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ApiConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        config::validation::validate_config(&config).map_err(config::ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        "stock-predictor-api starting"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    if let Err(e) = startup::run(config, &shutdown).await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
