//! Permanent material upload.
//!
//! A material is sent as a multipart form with a single `media` field. The
//! payload comes from either a local file or a remote URL and is held in
//! memory; nothing is written to disk.

use crate::WeChatClient;
use crate::response::{read_platform_json, required_str};
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{debug, error, info, instrument};
use wxpress_core::{AccessToken, MaterialKind, MediaSource, UploadedMaterial, VideoDescription};
use wxpress_error::{PlatformFailure, WxpressError, WxpressErrorKind, WxpressResult};

/// Filename and bytes resolved from a media source.
#[derive(Debug)]
pub(crate) struct ResolvedMedia {
    pub(crate) file_name: String,
    pub(crate) bytes: Vec<u8>,
}

/// Filename for a remote source: the last path segment, or the kind's default.
///
/// # Examples
///
/// ```
/// use wxpress_core::MaterialKind;
/// use wxpress_wechat::remote_file_name;
///
/// assert_eq!(remote_file_name("https://x/y/pic.png", MaterialKind::Image), "pic.png");
/// assert_eq!(remote_file_name("https://x", MaterialKind::Image), "image.jpg");
/// assert_eq!(remote_file_name("https://x/", MaterialKind::Video), "video.mp4");
/// ```
pub fn remote_file_name(url: &str, kind: MaterialKind) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                .map(str::to_string)
        })
        .unwrap_or_else(|| kind.default_file_name().to_string())
}

fn local_file_name(path: &Path, kind: MaterialKind) -> String {
    MediaSource::local_file_name(path).unwrap_or_else(|| kind.default_file_name().to_string())
}

impl WeChatClient {
    /// Resolves the filename and bytes for a source.
    #[instrument(skip_all, fields(media = %source.display_ref(), kind = %kind))]
    pub(crate) async fn resolve_media(
        &self,
        source: &MediaSource,
        kind: MaterialKind,
    ) -> WxpressResult<ResolvedMedia> {
        match source {
            MediaSource::Local(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    error!(path = %path.display(), error = %e, "Failed to read local media");
                    WxpressError::new(WxpressErrorKind::ReadFile {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })
                })?;
                Ok(ResolvedMedia {
                    file_name: local_file_name(path, kind),
                    bytes,
                })
            }
            MediaSource::Remote(url) => {
                let bytes = self.download(url).await?;
                Ok(ResolvedMedia {
                    file_name: remote_file_name(url, kind),
                    bytes,
                })
            }
        }
    }

    async fn download(&self, url: &str) -> WxpressResult<Vec<u8>> {
        let download_error = |reason: String| {
            error!(url, reason = %reason, "Failed to download media");
            WxpressError::new(WxpressErrorKind::Download {
                url: url.to_string(),
                reason,
            })
        };

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| download_error(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download_error(format!("HTTP {}", status.as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| download_error(e.without_url().to_string()))?;
        if bytes.is_empty() {
            return Err(download_error("response has no body".to_string()));
        }

        debug!(url, size = bytes.len(), "Downloaded media");
        Ok(bytes.to_vec())
    }

    /// Uploads one source as a permanent material and returns its media id.
    ///
    /// A description is only attached to video uploads.
    #[instrument(skip_all, fields(media = %source.display_ref(), kind = %kind))]
    pub async fn add_material(
        &self,
        token: &AccessToken,
        source: &MediaSource,
        kind: MaterialKind,
        description: Option<&VideoDescription>,
    ) -> WxpressResult<UploadedMaterial> {
        let media = self.resolve_media(source, kind).await?;
        debug!(file_name = %media.file_name, size = media.bytes.len(), "Resolved media");

        let mut form = Form::new().part("media", Part::bytes(media.bytes).file_name(media.file_name));
        if let (MaterialKind::Video, Some(description)) = (kind, description) {
            form = form.text("description", description.to_field_value());
        }

        let upload_error = |failure: PlatformFailure| WxpressError::new(WxpressErrorKind::Upload(failure));

        let response = self
            .http
            .post(self.endpoint("cgi-bin/material/add_material"))
            .query(&[("access_token", token.secret()), ("type", kind.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| upload_error(PlatformFailure::Transport(e.without_url().to_string())))?;

        let body = read_platform_json(response).await.map_err(upload_error)?;
        let media_id = required_str(&body, "media_id").map_err(upload_error)?;

        info!(media_id = %media_id, "Uploaded permanent material");
        Ok(UploadedMaterial::new(media_id, kind))
    }

    /// Uploads an image for use inside article HTML and returns its hosted URL.
    ///
    /// These images do not count against the permanent material quota and have
    /// no media id.
    #[instrument(skip_all, fields(media = %source.display_ref()))]
    pub async fn upload_content_image(
        &self,
        token: &AccessToken,
        source: &MediaSource,
    ) -> WxpressResult<String> {
        let media = self.resolve_media(source, MaterialKind::Image).await?;
        let form = Form::new().part("media", Part::bytes(media.bytes).file_name(media.file_name));

        let upload_error = |failure: PlatformFailure| WxpressError::new(WxpressErrorKind::Upload(failure));

        let response = self
            .http
            .post(self.endpoint("cgi-bin/media/uploadimg"))
            .query(&[("access_token", token.secret())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| upload_error(PlatformFailure::Transport(e.without_url().to_string())))?;

        let body = read_platform_json(response).await.map_err(upload_error)?;
        let url = required_str(&body, "url").map_err(upload_error)?;

        debug!(url = %url, "Uploaded content image");
        Ok(url)
    }
}
