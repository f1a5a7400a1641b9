//! `list_themes`: the formatter's theme catalog.

use crate::tools::{McpTool, ToolOutput};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;
use wxpress_core::ContentFormatter;
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Lists the themes `publish_article` accepts, one JSON text block each.
pub struct ListThemesTool {
    formatter: Arc<dyn ContentFormatter>,
}

impl ListThemesTool {
    /// Creates the tool.
    pub fn new(formatter: Arc<dyn ContentFormatter>) -> Self {
        Self { formatter }
    }
}

#[async_trait]
impl McpTool for ListThemesTool {
    fn name(&self) -> &str {
        "list_themes"
    }

    fn description(&self) -> &str {
        "List the article themes available to publish_article. \
         Each result is a JSON object with id, name and description."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    fn operation(&self) -> &str {
        "listing themes"
    }

    async fn execute(&self, _input: Value) -> WxpressResult<ToolOutput> {
        let themes = self.formatter.themes()?;
        debug!(count = themes.len(), "Listing themes");

        let blocks = themes
            .iter()
            .map(|theme| {
                serde_json::to_string(theme).map_err(|e| {
                    WxpressError::new(WxpressErrorKind::Format(format!(
                        "theme {} could not be serialized: {}",
                        theme.id, e
                    )))
                })
            })
            .collect::<WxpressResult<Vec<_>>>()?;

        Ok(ToolOutput::blocks(blocks))
    }
}
