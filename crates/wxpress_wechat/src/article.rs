//! Publishing formatted HTML articles as drafts.
//!
//! An article draft needs every body image hosted on the platform and a cover
//! uploaded as a permanent material. The publisher uploads both, rewrites the
//! body, then submits a single `news` draft.

use crate::WeChatClient;
use crate::draft::{DraftRequest, NewsArticle};
use async_trait::async_trait;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::{debug, info, instrument};
use wxpress_core::{
    ArticleDraft, CredentialProvider, DraftPublisher, MaterialKind, MediaSource,
};
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Host serving images that already live on the platform.
pub const PLATFORM_IMAGE_HOST: &str = "mmbiz.qpic.cn";

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<img\b[^>]*?\bsrc=")([^"]*)(")"#).expect("image source pattern is valid")
});

/// Image `src` values in document order, without duplicates.
pub(crate) fn image_sources(html: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in IMG_SRC.captures_iter(html) {
        let src = caps[2].to_string();
        if !src.is_empty() && !seen.contains(&src) {
            seen.push(src);
        }
    }
    seen
}

fn needs_upload(src: &str) -> bool {
    !src.contains(PLATFORM_IMAGE_HOST) && !src.starts_with("data:")
}

/// The reference an escaped `src` attribute value stands for.
///
/// Markdown renderers HTML-escape the attribute and percent-encode non-ASCII
/// bytes and spaces. Remote URLs stay percent-encoded, local paths are decoded
/// back to the filesystem name.
pub(crate) fn source_reference(src: &str) -> String {
    let unescaped = unescape_attribute(src);
    if MediaSource::classify(&unescaped).is_remote() {
        return unescaped;
    }
    match urlencoding::decode(&unescaped) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => unescaped,
    }
}

fn unescape_attribute(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// [`DraftPublisher`] that talks to the official account API.
#[derive(Clone)]
pub struct ArticlePublisher {
    client: WeChatClient,
    credentials: Arc<dyn CredentialProvider>,
}

impl ArticlePublisher {
    /// Creates a publisher using `client` and reading credentials per call.
    pub fn new(client: WeChatClient, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            client,
            credentials,
        }
    }
}

#[async_trait]
impl DraftPublisher for ArticlePublisher {
    #[instrument(skip_all, fields(title = %article.title()))]
    async fn publish_article(&self, article: &ArticleDraft) -> WxpressResult<String> {
        let credentials = self.credentials.credentials()?;
        let token = self.client.fetch_access_token(&credentials).await?;

        let sources = image_sources(article.html());
        let pending: Vec<(&String, String)> = sources
            .iter()
            .map(|src| (src, source_reference(src)))
            .filter(|(_, reference)| needs_upload(reference))
            .collect();
        debug!(images = sources.len(), pending = pending.len(), "Collected body images");

        let mut hosted: HashMap<&str, String> = HashMap::new();
        for (index, (src, reference)) in pending.iter().enumerate() {
            let url = self
                .client
                .upload_content_image(&token, &MediaSource::classify(reference))
                .await
                .map_err(|e| {
                    WxpressError::new(WxpressErrorKind::ImageUpload {
                        position: index + 1,
                        total: pending.len(),
                        image: reference.clone(),
                        cause: Box::new(e.into_kind()),
                    })
                })?;
            hosted.insert(src.as_str(), url);
        }

        let html = IMG_SRC.replace_all(article.html(), |caps: &Captures| {
            let src = &caps[2];
            let replacement = hosted.get(src).map(String::as_str).unwrap_or(src);
            format!("{}{}{}", &caps[1], replacement, &caps[3])
        });

        let cover = if article.cover().is_empty() {
            sources.first().map(|src| source_reference(src)).ok_or_else(|| {
                WxpressError::new(WxpressErrorKind::Validation(
                    "an article needs a cover image or at least one body image".to_string(),
                ))
            })?
        } else {
            article.cover().clone()
        };

        let thumb = self
            .client
            .add_material(&token, &MediaSource::classify(&cover), MaterialKind::Image, None)
            .await?;

        let request = DraftRequest {
            articles: vec![NewsArticle {
                title: article.title(),
                content: &html,
                thumb_media_id: thumb.media_id(),
                need_open_comment: 0,
                only_fans_can_comment: 0,
            }],
        };

        let media_id = self.client.add_draft(&token, &request).await?;
        info!(media_id = %media_id, uploaded_images = hosted.len(), "Article draft created");
        Ok(media_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_sources_in_order_without_duplicates() {
        let html = r#"<p><img src="a.png" alt="a"></p><img class="x" src="https://x/b.jpg"/><img src="a.png">"#;
        assert_eq!(image_sources(html), vec!["a.png", "https://x/b.jpg"]);
    }

    #[test]
    fn test_platform_hosted_images_are_kept() {
        assert!(!needs_upload("https://mmbiz.qpic.cn/mmbiz_png/abc/0"));
        assert!(!needs_upload("data:image/png;base64,AAAA"));
        assert!(needs_upload("./local.png"));
    }

    #[test]
    fn test_source_reference_decodes_local_paths() {
        assert_eq!(
            source_reference("./%E5%9B%BE%E7%89%87%20one.png"),
            "./图片 one.png"
        );
        assert_eq!(source_reference("a&amp;b.png"), "a&b.png");
        assert_eq!(source_reference("plain.png"), "plain.png");
    }

    #[test]
    fn test_source_reference_keeps_remote_encoding() {
        assert_eq!(
            source_reference("https://cdn.example.com/%E5%9B%BE.png?w=1&amp;h=2"),
            "https://cdn.example.com/%E5%9B%BE.png?w=1&h=2"
        );
    }
}
