//! # Item Service
//!
//! Serves the item API until Ctrl+C or SIGTERM, then shuts the system down.
//!
//! ```bash
//! RUST_LOG=info cargo run -p item-service -- --port 8080 --workers 10
//! ```

use actor_store::tracing::setup_tracing;
use anyhow::Context;
use clap::Parser;
use item_service::config::AppConfig;
use item_service::lifecycle::ItemSystem;
use item_service::web;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = AppConfig::parse();
    info!(?config, "Starting item service");

    let system = ItemSystem::new(&config);
    web::serve(system.router(), &config.address()).await?;

    system
        .shutdown()
        .await
        .context("failed to shut down item system")?;

    info!("Item service stopped");
    Ok(())
}
