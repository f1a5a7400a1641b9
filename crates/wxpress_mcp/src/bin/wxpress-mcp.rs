//! wxpress MCP server binary.

use anyhow::Result;
use tokio::io::{stdin, stdout};
use tracing_subscriber::{self, EnvFilter};
use wxpress_mcp::{ByteTransport, Router, RouterService, Server, ServerConfig, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the protocol stream
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting wxpress MCP server");

    let config = ServerConfig::load()?;
    let router = build_router(&config)?;

    tracing::info!(
        name = %router.name(),
        tools = router.list_tools().len(),
        "Router initialized"
    );

    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    tracing::info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
