//! In-memory user CRUD service.
//!
//! Usage:
//!   todo-api --port 5050
//!
//! All state lives in process memory and is discarded on shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use todo_api::{UserStore, build_router};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "todo-api")]
#[command(about = "In-memory user CRUD service over HTTP")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5050")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let store = Arc::new(UserStore::new());
    let app = build_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("Failed to bind HTTP port")?;
    info!("Starting server at port {}", args.port);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
