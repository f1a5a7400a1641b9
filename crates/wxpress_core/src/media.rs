//! Media sources and uploaded materials.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a media payload comes from.
///
/// Classified once from the caller's string: anything starting with `http://`
/// or `https://` is remote, everything else is a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// File on the local filesystem
    Local(PathBuf),
    /// URL to fetch the content from
    Remote(String),
}

impl MediaSource {
    /// Classifies a caller-supplied reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use wxpress_core::MediaSource;
    ///
    /// assert!(MediaSource::classify("https://example.com/a.png").is_remote());
    /// assert!(!MediaSource::classify("./a.png").is_remote());
    /// assert!(!MediaSource::classify("HTTP://example.com/a.png").is_remote());
    /// ```
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::Remote(reference.to_string())
        } else {
            Self::Local(PathBuf::from(reference))
        }
    }

    /// Returns true for URL sources.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Human-readable form of the reference, as the caller supplied it.
    pub fn display_ref(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }

    /// Final path segment of a local path, if it has one.
    pub fn local_file_name(path: &Path) -> Option<String> {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
    }
}

impl From<&str> for MediaSource {
    fn from(reference: &str) -> Self {
        Self::classify(reference)
    }
}

/// Kind of permanent material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Still image
    #[display("image")]
    Image,
    /// Video clip
    #[display("video")]
    Video,
}

impl MaterialKind {
    /// Value of the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Filename used when a remote URL has no path segment.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Image => "image.jpg",
            Self::Video => "video.mp4",
        }
    }
}

/// Title and introduction attached to a video upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDescription {
    /// Video title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Video introduction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
}

impl VideoDescription {
    /// Serialises the description as the multipart `description` field value.
    pub fn to_field_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A permanent material the platform accepted.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct UploadedMaterial {
    /// Durable platform identifier
    media_id: String,
    /// Kind of material
    kind: MaterialKind,
}

impl UploadedMaterial {
    /// Creates an uploaded material record.
    pub fn new(media_id: impl Into<String>, kind: MaterialKind) -> Self {
        Self {
            media_id: media_id.into(),
            kind,
        }
    }

    /// Consumes the record, returning the media id.
    pub fn into_media_id(self) -> String {
        self.media_id
    }
}
