//! MCP server implementation.

use crate::tools::{ToolOutput, ToolRegistry};
use mcp_server::Router;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    protocol::ServerCapabilities,
    prompt::Prompt,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info, instrument, warn};
use typed_builder::TypedBuilder;
use wxpress_error::{WxpressError, WxpressErrorKind};

/// MCP router dispatching to the registered tools.
///
/// Holds no per-invocation state; every call runs against fresh values.
#[derive(Clone, TypedBuilder)]
pub struct WxpressRouter {
    /// Name reported to protocol clients
    #[builder(default = "wxpress".to_string(), setter(into))]
    name: String,
    /// Version reported in the instructions
    #[builder(default = env!("CARGO_PKG_VERSION").to_string(), setter(into))]
    version: String,
    /// Tools offered to callers
    #[builder(default)]
    tools: ToolRegistry,
}

impl WxpressRouter {
    /// The registered tools.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Runs a tool and maps its failure to the protocol error representation.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, tool_name: &str, arguments: Value) -> Result<ToolOutput, ToolError> {
        let operation = self.tools.get(tool_name).map(|tool| tool.operation().to_string());

        match self.tools.execute(tool_name, arguments).await {
            Ok(output) => {
                info!(blocks = output.texts().len(), "Tool executed successfully");
                Ok(output)
            }
            Err(e) => {
                warn!(error = %e, "Tool execution failed");
                Err(to_tool_error(operation.as_deref(), &e))
            }
        }
    }
}

/// Builds the caller-facing error.
///
/// The message is the failing operation followed by the error kind's message;
/// the source location of the error is never included.
pub fn to_tool_error(operation: Option<&str>, error: &WxpressError) -> ToolError {
    let message = match operation {
        Some(operation) => format!("{} failed: {}", operation, error.message()),
        None => error.message(),
    };

    match error.kind() {
        WxpressErrorKind::Validation(_) => ToolError::InvalidParameters(message),
        WxpressErrorKind::UnknownTool(_) => ToolError::NotFound(message),
        _ => ToolError::ExecutionError(message),
    }
}

impl Router for WxpressRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "wxpress MCP Server v{}\n\n\
            This server publishes content to a WeChat official account draft box. \
            Use list_themes to pick a theme, publish_article for Markdown articles and \
            publish_image_message for image posts. Credentials come from WECHAT_APP_ID and \
            WECHAT_APP_SECRET in the server environment.\n\n\
            Available tools: {}",
            self.version,
            self.tools
                .list()
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new()
            .with_tools(false) // fixed tool set
            .build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, "Tool called");

        let router = self.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            let output = router.dispatch(&tool_name, arguments).await?;
            Ok(output.into_texts().into_iter().map(Content::text).collect())
        })
    }

    fn list_resources(&self) -> Vec<Resource> {
        vec![]
    }

    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        let uri = uri.to_string();
        Box::pin(async move { Err(ResourceError::NotFound(format!("Resource {} not found", uri))) })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        vec![]
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let prompt_name = prompt_name.to_string();
        Box::pin(async move {
            Err(PromptError::NotFound(format!(
                "Prompt {} not found",
                prompt_name
            )))
        })
    }
}
