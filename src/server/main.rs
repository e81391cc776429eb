//! Web server for the landmark search form.
//!
//! Serves the form on `/` and renders OpenTripMap results on
//! `POST /landmarks`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use landmark_explorer::config::Config;
use landmark_explorer::opentripmap::{ApiKey, PlacesClient};
use landmark_explorer::web::{self, AppState};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "explorer")]
#[command(about = "Find landmarks around a city")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1:5500")]
    listen: String,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OpenTripMap API key
    #[arg(long, env = "OPENTRIPMAP_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Landmark Explorer");

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    let base_url = config.places.endpoint_base()?;
    let search = config.search_options();

    if args.api_key.trim().is_empty() {
        warn!("API key is empty; every lookup will fail");
    }

    let places = PlacesClient::new(base_url, ApiKey::new(args.api_key), config.places.timeout())
        .context("Failed to create places client")?;

    info!(
        "Places API at {} (radius {} m, kinds '{}', min rating {}, format kinds: {})",
        places.base_url(),
        search.radius,
        search.category,
        search.min_rating,
        search.format_kinds
    );

    let listener = TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("Cannot bind to {}", args.listen))?;

    web::serve(listener, AppState { places, search }, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
