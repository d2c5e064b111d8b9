//! musicat-api - music catalog HTTP service
//!
//! Startup order: tracing, build identification, configuration, database
//! (schema, reference tables, optional demo catalog), token secret, then
//! the HTTP server with graceful shutdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use musicat_common::config::{resolve_database_path, TomlConfig};
use musicat_common::db::{init_database, load_or_init_token_secret, seed_demo_catalog};
use musicat_api::{bind_listener, build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8082;
const DEFAULT_HOST: &str = "127.0.0.1";

/// Command-line arguments for musicat-api
#[derive(Parser, Debug)]
#[command(name = "musicat-api")]
#[command(about = "Music catalog HTTP service")]
#[command(version)]
struct Args {
    /// Port to listen on [default: 8082]
    #[arg(short, long, env = "MUSICAT_PORT")]
    port: Option<u16>,

    /// Address to bind [default: 127.0.0.1]
    #[arg(long, env = "MUSICAT_HOST")]
    host: Option<String>,

    /// SQLite database file
    #[arg(short, long, env = "MUSICAT_DATABASE")]
    database: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "MUSICAT_CONFIG")]
    config: Option<PathBuf>,

    /// Do not seed the demo catalog into an empty database
    #[arg(long)]
    no_demo_data: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing so its log level can apply; RUST_LOG still wins
    let config = TomlConfig::load_or_default(args.config.as_deref()).context("Failed to load configuration")?;

    let default_filter = config
        .logging
        .level
        .clone()
        .unwrap_or_else(|| "musicat_api=info,musicat_common=info,tower_http=info".to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting musicat-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let db_path = resolve_database_path(args.database.as_deref(), &config);
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let seed = !args.no_demo_data && config.seed_demo_data.unwrap_or(true);
    if seed && seed_demo_catalog(&pool).await.context("Failed to seed demo catalog")? {
        info!("Empty catalog populated with demo data");
    }

    let token_secret = load_or_init_token_secret(&pool)
        .await
        .context("Failed to load token secret")?;

    let app = build_router(AppState::new(pool, token_secret));

    let host = args
        .host
        .or(config.host)
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port.or(config.port).unwrap_or(DEFAULT_PORT);
    let listener = bind_listener(&host, port)
        .await
        .with_context(|| format!("Failed to bind to {}:{}", host, port))?;
    let addr = listener.local_addr().context("Failed to read bound address")?;
    info!("musicat-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
