use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tradelens_warehouse::{Warehouse, WarehouseConfig};
use tradelens_web::{build_router, serve, AppState, ServeError};

/// Serve the trade analytics API and an optional static report UI.
#[derive(Debug, Parser)]
#[command(name = "tradelens-web", author, version, about = "Trade analytics HTTP API")]
struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Directory of static assets to serve at the root path.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Override the tradelens home directory.
    #[arg(long)]
    home: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(ServeArgs::parse()).await {
        error!("fatal: {err}");
        std::process::exit(1);
    }
}

async fn run(args: ServeArgs) -> Result<(), ServeError> {
    let config = match args.home {
        Some(home) => WarehouseConfig::at_home(home),
        None => WarehouseConfig::default(),
    };
    let warehouse = Warehouse::open(config)?;
    info!("warehouse at {}", warehouse.db_path().display());

    let router = build_router(AppState::new(warehouse), args.static_dir.as_deref());
    serve(args.addr, router).await?;
    Ok(())
}
