//! Fetch Missions MCP Server
//!
//! This MCP server exposes each mission as a tool, so agent clients can
//! trigger them the way the page's buttons do:
//! - Listing posts
//! - Looking up a user, a Pokémon or a GitHub profile
//! - Reading the current weather

mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::MissionsServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting fetch-missions MCP server");

    let server = MissionsServer::from_env()?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
