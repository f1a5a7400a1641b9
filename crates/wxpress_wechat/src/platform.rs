//! [`PublishingPlatform`] implementation backed by the HTTP client.

use crate::WeChatClient;
use async_trait::async_trait;
use wxpress_core::{
    AccessToken, ImageMessageDraft, MaterialKind, MediaSource, PublishingPlatform,
    UploadedMaterial, VideoDescription, WeChatCredentials,
};
use wxpress_error::WxpressResult;

#[async_trait]
impl PublishingPlatform for WeChatClient {
    async fn access_token(&self, credentials: &WeChatCredentials) -> WxpressResult<AccessToken> {
        self.fetch_access_token(credentials).await
    }

    async fn upload_material(
        &self,
        token: &AccessToken,
        source: &MediaSource,
        kind: MaterialKind,
        description: Option<&VideoDescription>,
    ) -> WxpressResult<UploadedMaterial> {
        self.add_material(token, source, kind, description).await
    }

    async fn add_image_message_draft(
        &self,
        token: &AccessToken,
        draft: &ImageMessageDraft,
    ) -> WxpressResult<String> {
        WeChatClient::add_image_message_draft(self, token, draft).await
    }
}
