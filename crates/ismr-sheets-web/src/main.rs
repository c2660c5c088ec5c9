//! ismr-web - interactive upload/download form for the ISMR converter

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ismr_sheets_web::state::AppState;

#[derive(Parser)]
#[command(name = "ismr-web")]
#[command(
    author,
    version,
    about = "Web upload form for the ISMR to XLSX converter"
)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Maximum request body size in MiB
    #[arg(long, default_value_t = 32)]
    max_upload_mib: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let app = ismr_sheets_web::app(AppState::new(), args.max_upload_mib);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    tracing::info!(addr = %args.bind, "ismr-web listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
