//! Model Context Protocol (MCP) server for publishing to WeChat official accounts.
//!
//! Exposes three tools over MCP:
//!
//! - **publish_article**: render Markdown with a theme and create an article draft
//! - **list_themes**: list the themes `publish_article` accepts
//! - **publish_image_message**: upload images and create an image-message draft
//!
//! # Usage
//!
//! ```no_run
//! use wxpress_mcp::{ByteTransport, RouterService, Server, ServerConfig, build_router};
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     let router = build_router(&config)?;
//!
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod server;
mod tools;

pub use config::{CONFIG_VAR, ServerConfig, ServerSection, WeChatSection};
pub use server::{WxpressRouter, to_tool_error};
pub use tools::{
    ARTICLE_HIGHLIGHT_STYLE, DEFAULT_TITLE, ListThemesTool, McpTool, PublishArticleTool, PublishImageMessageTool,
    ToolOutput, ToolRegistry,
};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};

use std::sync::Arc;
use tracing::instrument;
use wxpress_core::{CredentialProvider, EnvCredentials};
use wxpress_error::WxpressResult;
use wxpress_format::MarkdownFormatter;
use wxpress_wechat::{ArticlePublisher, WeChatClient};

/// Wires the production router: platform client, Markdown formatter and
/// environment credentials.
#[instrument(skip_all, fields(name = %config.server().name()))]
pub fn build_router(config: &ServerConfig) -> WxpressResult<WxpressRouter> {
    let client = WeChatClient::with_base_url(config.wechat().api_base_url(), config.wechat().timeout())?;
    let credentials: Arc<dyn CredentialProvider> = Arc::new(EnvCredentials::new());
    let formatter = Arc::new(MarkdownFormatter::new());
    let publisher = Arc::new(ArticlePublisher::new(client.clone(), credentials.clone()));

    let tools = ToolRegistry::standard(formatter, publisher, Arc::new(client), credentials);

    Ok(WxpressRouter::builder()
        .name(config.server().name().clone())
        .version(env!("CARGO_PKG_VERSION"))
        .tools(tools)
        .build())
}
