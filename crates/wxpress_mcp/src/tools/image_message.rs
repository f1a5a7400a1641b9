//! `publish_image_message`: upload images, then create an image-message draft.
//!
//! Each invocation walks validate, credentials, token, uploads, draft. Images
//! are uploaded one at a time in request order, so the draft's `image_list`
//! order equals the caller's order. The first failure aborts the invocation.
//! Materials uploaded before the failure stay on the platform.

use crate::tools::{McpTool, ToolOutput, required_str, validation};
use async_trait::async_trait;
use derive_more::Display;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use wxpress_core::{
    CredentialProvider, ImageMessageDraft, MaterialKind, MediaSource, PublishingPlatform,
};
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Progress of one invocation, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Step {
    #[display("validating arguments")]
    Validate,
    #[display("reading credentials")]
    Credentials,
    #[display("fetching access token")]
    Token,
    #[display("uploading image {_0} of {_1}")]
    Upload(usize, usize),
    #[display("creating draft")]
    Draft,
}

/// Validated arguments.
#[derive(Debug)]
struct Request<'a> {
    title: &'a str,
    content: &'a str,
    images: Vec<&'a str>,
}

impl<'a> Request<'a> {
    fn parse(input: &'a Value) -> WxpressResult<Self> {
        let title = required_str(input, "title")?;
        let content = required_str(input, "content")?;

        let images = input
            .get("images")
            .and_then(Value::as_array)
            .ok_or_else(|| validation("missing 'images'".to_string()))?;
        if images.is_empty() {
            return Err(validation("'images' must not be empty".to_string()));
        }

        let images = images
            .iter()
            .enumerate()
            .map(|(index, image)| match image.as_str() {
                Some(image) if !image.is_empty() => Ok(image),
                _ => Err(validation(format!(
                    "'images[{}]' must be a non-empty string",
                    index
                ))),
            })
            .collect::<WxpressResult<Vec<_>>>()?;

        Ok(Self {
            title,
            content,
            images,
        })
    }
}

/// Publishes an image message built from local or remote images.
pub struct PublishImageMessageTool {
    platform: Arc<dyn PublishingPlatform>,
    credentials: Arc<dyn CredentialProvider>,
}

impl PublishImageMessageTool {
    /// Creates the tool.
    pub fn new(
        platform: Arc<dyn PublishingPlatform>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            platform,
            credentials,
        }
    }
}

#[async_trait]
impl McpTool for PublishImageMessageTool {
    fn name(&self) -> &str {
        "publish_image_message"
    }

    fn description(&self) -> &str {
        "Publish an image message (image and text post) to the official account draft box. \
         Images are local paths or http(s) URLs and appear in the given order."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Post title"
                },
                "content": {
                    "type": "string",
                    "description": "Post text"
                },
                "images": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 1,
                    "description": "Local file paths or http(s) URLs, in display order"
                }
            },
            "required": ["title", "content", "images"]
        })
    }

    fn operation(&self) -> &str {
        "publishing image message"
    }

    #[instrument(skip_all, name = "publish_image_message")]
    async fn execute(&self, input: Value) -> WxpressResult<ToolOutput> {
        debug!(step = %Step::Validate);
        let request = Request::parse(&input)?;

        debug!(step = %Step::Credentials);
        let credentials = self.credentials.credentials()?;

        debug!(step = %Step::Token);
        let token = self.platform.access_token(&credentials).await?;

        let total = request.images.len();
        let mut media_ids = Vec::with_capacity(total);
        for (index, image) in request.images.iter().enumerate() {
            let step = Step::Upload(index + 1, total);
            debug!(step = %step, image);

            let source = MediaSource::classify(image);
            let uploaded = self
                .platform
                .upload_material(&token, &source, MaterialKind::Image, None)
                .await
                .map_err(|e| {
                    warn!(step = %step, image, error = %e, "Upload failed, aborting");
                    WxpressError::new(WxpressErrorKind::ImageUpload {
                        position: index + 1,
                        total,
                        image: image.to_string(),
                        cause: Box::new(e.into_kind()),
                    })
                })?;
            media_ids.push(uploaded.into_media_id());
        }

        debug!(step = %Step::Draft, images = media_ids.len());
        let draft = ImageMessageDraft::new(request.title, request.content, media_ids)?;
        let media_id = self.platform.add_image_message_draft(&token, &draft).await?;

        info!(media_id = %media_id, images = total, "Published image message draft");
        Ok(ToolOutput::text(format!(
            "Image message draft created, media_id: {}",
            media_id
        )))
    }
}
