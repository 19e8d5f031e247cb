//! launchdashd — the launch records dashboard server.
//!
//! Loads the launch records CSV once, then serves the dashboard page and
//! its chart partials until interrupted.
//!
//! # Usage
//!
//! ```text
//! launchdashd --data data/spacex_launch_dash.csv --host 0.0.0.0 --port 8050 --debug
//! launchdashd --config launchdash.toml
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use launchdash_core::DashConfig;
use launchdash_dashboard::{DashboardState, dashboard_router};
use launchdash_store::RecordStore;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "launchdashd", about = "Launch records dashboard server", version)]
struct Cli {
    /// Path to a launchdash.toml config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch records CSV. Overrides `[data].path`.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Address to bind. Overrides `[server].host`.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on. Overrides `[server].port`.
    #[arg(long)]
    port: Option<u16>,

    /// Log launchdash targets at debug level.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    fn resolve_config(&self) -> anyhow::Result<DashConfig> {
        let mut config = match &self.config {
            Some(path) => DashConfig::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => DashConfig::default(),
        };
        if let Some(data) = &self.data {
            config.data.path = data.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.debug {
            config.server.debug = true;
        }
        Ok(config)
    }
}

fn default_log_filter(debug: bool) -> &'static str {
    if debug {
        "info,launchdashd=debug,launchdash_store=debug,launchdash_dashboard=debug"
    } else {
        "info"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter(config.server.debug))),
        )
        .init();

    run(config).await
}

async fn run(config: DashConfig) -> anyhow::Result<()> {
    info!("launch dashboard starting");

    let store = RecordStore::open(&config.data.path)
        .with_context(|| format!("loading launch records from {}", config.data.path.display()))?;
    info!(
        path = ?config.data.path,
        rows = store.len(),
        sites = store.sites().len(),
        "launch records loaded"
    );

    let router = dashboard_router(DashboardState::new(store, &config));
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, debug = config.server.debug, "dashboard listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("launch dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to install Ctrl-C handler, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
