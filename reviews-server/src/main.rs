//! reviews-server - customer review analysis service
//!
//! Loads the review data file once, then serves:
//! - GET: reviews filtered by `location`, `start_date`, `end_date`, each
//!   annotated with sentiment scores
//! - POST: validated review submissions (acknowledged, not stored)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use reviews_common::config::{load_toml_config, resolve_data_file, DEFAULT_PORT};
use reviews_server::sentiment::VaderScorer;
use reviews_server::store::ReviewStore;
use reviews_server::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default tracing filter when neither `RUST_LOG` nor the config file sets one
const DEFAULT_LOG_FILTER: &str = "reviews_server=info,tower_http=info";

/// Command-line arguments for reviews-server
#[derive(Parser, Debug)]
#[command(name = "reviews-server")]
#[command(about = "Customer review analysis service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PORT")]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0", env = "REVIEWS_BIND")]
    bind: String,

    /// Review data file (CSV)
    #[arg(short, long, env = "REVIEWS_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "REVIEWS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml_config =
        load_toml_config(args.config.as_deref()).context("Failed to load config file")?;

    // Initialize tracing
    let default_filter = toml_config
        .log_level
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting reviews-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let data_file = resolve_data_file(args.data_file.as_deref(), &toml_config);
    info!("Review data file: {}", data_file.display());

    let store = ReviewStore::from_csv_path(&data_file)
        .with_context(|| format!("Failed to load reviews from {}", data_file.display()))?;
    if store.is_empty() {
        warn!("Review data file contains no reviews");
    }

    let scorer = Arc::new(VaderScorer::new());
    info!("Sentiment lexicon loaded");

    let state = AppState::new(store, scorer);
    let app = build_router(state);

    let ip = args
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", args.bind))?;
    let addr = SocketAddr::new(ip, args.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on port {}...", args.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
