//! Application credentials and where they come from.

use std::fmt;
use tracing::debug;
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Environment variable holding the application id.
pub const APP_ID_VAR: &str = "WECHAT_APP_ID";
/// Environment variable holding the application secret.
pub const APP_SECRET_VAR: &str = "WECHAT_APP_SECRET";

/// Application id/secret pair used to request access tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct WeChatCredentials {
    app_id: String,
    app_secret: String,
}

impl WeChatCredentials {
    /// Creates credentials from an explicit pair.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Builds credentials from a variable lookup.
    ///
    /// Unset and empty values are both treated as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> WxpressResult<Self> {
        let read = |name: &str| {
            lookup(name).filter(|value| !value.is_empty()).ok_or_else(|| {
                WxpressError::new(WxpressErrorKind::Config(format!("{name} is not set")))
            })
        };

        let app_id = read(APP_ID_VAR)?;
        let app_secret = read(APP_SECRET_VAR)?;
        Ok(Self { app_id, app_secret })
    }

    /// Application id.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Application secret.
    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl fmt::Debug for WeChatCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeChatCredentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

/// Supplies credentials at the moment an operation needs them.
pub trait CredentialProvider: Send + Sync {
    /// Returns the current credentials, or a `Config` error when absent.
    fn credentials(&self) -> WxpressResult<WeChatCredentials>;
}

impl CredentialProvider for WeChatCredentials {
    fn credentials(&self) -> WxpressResult<WeChatCredentials> {
        Ok(self.clone())
    }
}

/// Reads `WECHAT_APP_ID`/`WECHAT_APP_SECRET` on every call.
#[derive(Clone, Copy)]
pub struct EnvCredentials {
    lookup: fn(&str) -> Option<String>,
}

impl EnvCredentials {
    /// Reads from the process environment.
    pub fn new() -> Self {
        Self {
            lookup: |name| std::env::var(name).ok(),
        }
    }

    /// Reads through a custom lookup instead of the process environment.
    pub fn with_lookup(lookup: fn(&str) -> Option<String>) -> Self {
        Self { lookup }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EnvCredentials")
    }
}

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> WxpressResult<WeChatCredentials> {
        let credentials = WeChatCredentials::from_lookup(self.lookup)?;
        debug!(app_id = %credentials.app_id(), "Loaded platform credentials");
        Ok(credentials)
    }
}
