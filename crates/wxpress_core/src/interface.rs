//! Traits at which the tool router meets its collaborators.

use crate::{
    AccessToken, ArticleDraft, FormatOptions, FormattedArticle, ImageMessageDraft, MaterialKind,
    MediaSource, ThemeSummary, UploadedMaterial, VideoDescription, WeChatCredentials,
};
use async_trait::async_trait;
use wxpress_error::WxpressResult;

/// The publishing platform's official account API.
///
/// Each method is a single outbound operation with no retries.
#[async_trait]
pub trait PublishingPlatform: Send + Sync {
    /// Obtains a short-lived access token for the application.
    async fn access_token(&self, credentials: &WeChatCredentials) -> WxpressResult<AccessToken>;

    /// Uploads one source as a permanent material.
    async fn upload_material(
        &self,
        token: &AccessToken,
        source: &MediaSource,
        kind: MaterialKind,
        description: Option<&VideoDescription>,
    ) -> WxpressResult<UploadedMaterial>;

    /// Submits an image-message draft and returns its media id.
    async fn add_image_message_draft(
        &self,
        token: &AccessToken,
        draft: &ImageMessageDraft,
    ) -> WxpressResult<String>;
}

/// Renders Markdown into platform-ready HTML and exposes the theme catalog.
#[async_trait]
pub trait ContentFormatter: Send + Sync {
    /// Renders `markdown` with the given theme (catalog default when `None`).
    async fn format(
        &self,
        markdown: &str,
        theme_id: Option<&str>,
        options: &FormatOptions,
    ) -> WxpressResult<FormattedArticle>;

    /// Lists the available themes.
    fn themes(&self) -> WxpressResult<Vec<ThemeSummary>>;
}

/// Publishes a formatted article as a draft.
#[async_trait]
pub trait DraftPublisher: Send + Sync {
    /// Creates the draft and returns its media id.
    async fn publish_article(&self, article: &ArticleDraft) -> WxpressResult<String>;
}
