//! Health and version HTTP service entry point.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use demo_app::api;
use demo_app::config::Config;

/// Health and version HTTP service.
#[derive(Parser, Debug)]
#[command(name = "demo-app")]
#[command(about = "Serves GET /healthz and GET /version")]
#[command(version)]
struct Args {
    /// Host address to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("demo_app=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration, then apply CLI overrides
    let mut config = Config::load()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!("Starting on {}", config.bind_addr());

    api::serve(&config).await?;
    Ok(())
}
