//! route-describer demo server.
//!
//! Serves a sample route tree whose every path answers `OPTIONS` with the
//! routes reachable beneath it.
//!
//! ```text
//! $ curl -X OPTIONS http://localhost:8080/route/test2
//! [{"method":"GET","uri":"/inner"}]
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use route_describer::config::{load_config, ServerConfig};
use route_describer::http::{demo::demo_routes, HttpServer};
use route_describer::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "route-describer")]
#[command(about = "Self-describing HTTP route tree demo server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_tracing(&config.observability.log_level);

    tracing::info!("route-describer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        content_type = %config.describe.content_type,
        sort_by_path = config.describe.sort_by_path,
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
    let server = HttpServer::new(config, demo_routes())?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
