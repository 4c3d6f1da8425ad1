//! fetch-proxy
//!
//! Fetches the document at a caller-supplied URL and returns it as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /?url=...
//!  ─────────────────▶ request id → trace → cors → timeout → fetch_html
//!                                                              │
//!                                   ┌──────────────────────────┘
//!                                   ▼
//!                           FetchService::fetch
//!                      validate → GET upstream → status check → normalize
//!                                   │
//!  ◀────────────────────────────────┘
//!     200 {"html"} | 400 {"detail"} | 4xx/5xx {"error"} | 500 {"error"}
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use fetch_proxy::config::{load_config, FetchProxyConfig};
use fetch_proxy::lifecycle::{signals, Shutdown};
use fetch_proxy::observability::{logging, metrics};
use fetch_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "fetch-proxy")]
#[command(about = "Fetch a URL and return its body as JSON", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FetchProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fetch-proxy starting");

    let server = HttpServer::new(config);
    let config = server.config();

    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = config.upstream.timeout_secs,
        follow_redirects = config.upstream.follow_redirects,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_termination().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
