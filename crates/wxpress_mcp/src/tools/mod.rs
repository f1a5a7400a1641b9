//! MCP tools and the registry the router dispatches through.

mod article;
mod image_message;
mod themes;

pub use article::{ARTICLE_HIGHLIGHT_STYLE, DEFAULT_TITLE, PublishArticleTool};
pub use image_message::PublishImageMessageTool;
pub use themes::ListThemesTool;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};
use wxpress_core::{ContentFormatter, CredentialProvider, DraftPublisher, PublishingPlatform};
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// A named, schema-described operation exposed to protocol callers.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as advertised in `list_tools`.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON schema of the arguments.
    fn input_schema(&self) -> Value;

    /// Overall operation, used to prefix failure messages (e.g. "publishing article").
    fn operation(&self) -> &str;

    /// Runs the tool once. Nothing is kept between invocations.
    async fn execute(&self, input: Value) -> WxpressResult<ToolOutput>;
}

/// Successful tool result: an ordered list of text blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    blocks: Vec<String>,
}

impl ToolOutput {
    /// Output with a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![text.into()],
        }
    }

    /// Output with one block per item.
    pub fn blocks(blocks: Vec<String>) -> Self {
        Self { blocks }
    }

    /// The text blocks in order.
    pub fn texts(&self) -> &[String] {
        &self.blocks
    }

    /// Consumes the output, returning its blocks.
    pub fn into_texts(self) -> Vec<String> {
        self.blocks
    }
}

/// Registry of tools, in advertisement order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `publish_article`, `list_themes` and `publish_image_message`.
    pub fn standard(
        formatter: Arc<dyn ContentFormatter>,
        publisher: Arc<dyn DraftPublisher>,
        platform: Arc<dyn PublishingPlatform>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(PublishArticleTool::new(formatter.clone(), publisher));
        registry.register(ListThemesTool::new(formatter));
        registry.register(PublishImageMessageTool::new(platform, credentials));
        registry
    }

    /// Adds a tool. Lookups return the first tool registered under a name.
    pub fn register(&mut self, tool: impl McpTool + 'static) {
        self.tools.push(Arc::new(tool));
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    /// All registered tools.
    pub fn list(&self) -> &[Arc<dyn McpTool>] {
        &self.tools
    }

    /// Runs the named tool.
    #[instrument(skip(self, input))]
    pub async fn execute(&self, name: &str, input: Value) -> WxpressResult<ToolOutput> {
        let tool = self
            .get(name)
            .ok_or_else(|| WxpressError::new(WxpressErrorKind::UnknownTool(name.to_string())))?;
        debug!(operation = tool.operation(), "Dispatching tool");
        tool.execute(input).await
    }
}

/// Reads a required, non-empty string argument.
pub(crate) fn required_str<'a>(input: &'a Value, key: &str) -> WxpressResult<&'a str> {
    match input.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(validation(format!("'{}' must not be empty", key))),
        None => Err(validation(format!("missing '{}'", key))),
    }
}

/// Reads an optional string argument; `null` counts as absent.
pub(crate) fn optional_str<'a>(input: &'a Value, key: &str) -> WxpressResult<Option<&'a str>> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(validation(format!("'{}' must be a string", key))),
    }
}

#[track_caller]
pub(crate) fn validation(message: String) -> WxpressError {
    WxpressError::new(WxpressErrorKind::Validation(message))
}
