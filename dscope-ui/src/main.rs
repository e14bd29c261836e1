//! dscope-ui - DistroScope web interface
//!
//! Serves the catalog browser UI and the JSON API for the filter,
//! recommendation, and comparison engines. The catalog is loaded once at
//! startup and shared read-only across all handlers.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use dscope_common::{config, Catalog};
use dscope_ui::{build_router, AppState};

/// Command-line options: the highest-priority configuration tier
#[derive(Debug, Parser)]
#[command(name = "dscope-ui", about = "DistroScope catalog browser service")]
struct Cli {
    /// Listen port (overrides DSCOPE_PORT and the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Catalog JSON file replacing the bundled dataset
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification logged immediately after tracing init
    info!(
        "Starting DistroScope UI (dscope-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = config::resolve(cli.port, cli.catalog)?;

    let catalog = Catalog::load(config.catalog_path.as_deref())?;

    let state = AppState::new(catalog);
    let app = build_router(state);

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("dscope-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
