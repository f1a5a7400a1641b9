//! Error types for the wxpress publishing adapter.
//!
//! Every fallible operation in the workspace returns [`WxpressResult`]. The error
//! records the source location where it was raised; the [`WxpressErrorKind`]
//! carries the failure itself and renders the caller-facing message.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod kind;
mod platform;

pub use kind::WxpressErrorKind;
pub use platform::PlatformFailure;

use derive_more::{Display, Error};

/// Wxpress error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Wxpress Error: {} at {}:{}", kind, file, line)]
pub struct WxpressError {
    /// The specific error kind.
    pub kind: WxpressErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl WxpressError {
    /// Creates a new error with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use wxpress_error::{WxpressError, WxpressErrorKind};
    ///
    /// let err = WxpressError::new(WxpressErrorKind::Config("WECHAT_APP_ID is not set".into()));
    /// assert!(err.message().contains("WECHAT_APP_ID"));
    /// assert!(!err.message().contains(".rs"));
    /// ```
    #[track_caller]
    pub fn new(kind: WxpressErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &WxpressErrorKind {
        &self.kind
    }

    /// Consumes the error, returning its kind.
    pub fn into_kind(self) -> WxpressErrorKind {
        self.kind
    }

    /// Caller-facing message without the source location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<WxpressErrorKind> for WxpressError {
    #[track_caller]
    fn from(kind: WxpressErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for wxpress operations.
pub type WxpressResult<T> = Result<T, WxpressError>;
