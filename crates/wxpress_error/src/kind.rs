//! Error kinds for the publishing adapter.

use crate::PlatformFailure;
use derive_more::Display;

/// Specific error conditions raised while serving a tool invocation.
///
/// The `Display` output of a kind is what the protocol caller sees, so it only
/// contains information the caller supplied or the platform returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum WxpressErrorKind {
    /// Required configuration or environment is missing.
    #[display("configuration error: {}", _0)]
    Config(String),

    /// Tool arguments are missing or empty.
    #[display("invalid arguments: {}", _0)]
    Validation(String),

    /// The access token could not be obtained.
    #[display("fetching access token failed: {}", _0)]
    Credential(PlatformFailure),

    /// A remote media source could not be fetched.
    #[display("downloading {url} failed: {reason}")]
    Download {
        /// Source URL
        url: String,
        /// What went wrong
        reason: String,
    },

    /// A local media source could not be read.
    #[display("reading {path} failed: {reason}")]
    ReadFile {
        /// Source path
        path: String,
        /// What went wrong
        reason: String,
    },

    /// The platform rejected a material upload.
    #[display("uploading material failed: {}", _0)]
    Upload(PlatformFailure),

    /// One image of an ordered upload sequence failed.
    #[display("uploading image {position} of {total} ({image}) failed: {cause}")]
    ImageUpload {
        /// 1-based position of the image in the request
        position: usize,
        /// Number of images in the request
        total: usize,
        /// The image reference as supplied by the caller
        image: String,
        /// The underlying failure
        cause: Box<WxpressErrorKind>,
    },

    /// The platform rejected a draft.
    #[display("creating draft failed: {}", _0)]
    Draft(PlatformFailure),

    /// The content formatter could not render the article.
    #[display("formatting content failed: {}", _0)]
    Format(String),

    /// No tool is registered under the requested name.
    #[display("unknown tool: {}", _0)]
    UnknownTool(String),
}

impl WxpressErrorKind {
    /// Returns the innermost platform failure, if this kind wraps one.
    pub fn platform_failure(&self) -> Option<&PlatformFailure> {
        match self {
            Self::Credential(failure) | Self::Upload(failure) | Self::Draft(failure) => {
                Some(failure)
            }
            Self::ImageUpload { cause, .. } => cause.platform_failure(),
            _ => None,
        }
    }
}
