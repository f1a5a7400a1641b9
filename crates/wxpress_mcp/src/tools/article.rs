//! `publish_article`: Markdown in, article draft out.

use crate::tools::{McpTool, ToolOutput, optional_str, required_str};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};
use wxpress_core::{ArticleDraft, ContentFormatter, DraftPublisher, FormatOptions};
use wxpress_error::WxpressResult;

/// Title used when the document does not declare one.
pub const DEFAULT_TITLE: &str = "this is title";

/// Code block colour scheme every article is rendered with.
pub const ARTICLE_HIGHLIGHT_STYLE: &str = "solarized-light";

/// Formats Markdown and publishes it as an article draft.
pub struct PublishArticleTool {
    formatter: Arc<dyn ContentFormatter>,
    publisher: Arc<dyn DraftPublisher>,
}

impl PublishArticleTool {
    /// Creates the tool.
    pub fn new(formatter: Arc<dyn ContentFormatter>, publisher: Arc<dyn DraftPublisher>) -> Self {
        Self {
            formatter,
            publisher,
        }
    }
}

#[async_trait]
impl McpTool for PublishArticleTool {
    fn name(&self) -> &str {
        "publish_article"
    }

    fn description(&self) -> &str {
        "Format a Markdown article and publish it to the official account draft box. \
         Front matter may declare title and cover; otherwise the first image is the cover."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "Markdown article, optionally starting with a YAML front matter block"
                },
                "theme_id": {
                    "type": "string",
                    "description": "Theme id from list_themes; the default theme when omitted"
                }
            },
            "required": ["content"]
        })
    }

    fn operation(&self) -> &str {
        "publishing article"
    }

    #[instrument(skip_all, name = "publish_article")]
    async fn execute(&self, input: Value) -> WxpressResult<ToolOutput> {
        let content = required_str(&input, "content")?;
        let theme_id = optional_str(&input, "theme_id")?;

        let options = FormatOptions::new(ARTICLE_HIGHLIGHT_STYLE, true, true);
        let formatted = self.formatter.format(content, theme_id, &options).await?;

        let article = ArticleDraft::new(
            formatted.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            formatted.html,
            formatted.cover.unwrap_or_default(),
        );
        let media_id = self.publisher.publish_article(&article).await?;

        info!(media_id = %media_id, "Published article draft");
        Ok(ToolOutput::text(format!(
            "Article draft created, media_id: {}",
            media_id
        )))
    }
}
