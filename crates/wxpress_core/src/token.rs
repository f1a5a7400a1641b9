//! Short-lived platform access token.

use std::fmt;

/// Bearer credential issued by the platform for one application.
///
/// Tokens are fetched fresh for each top-level operation and never cached.
/// The value is redacted from `Debug` output so it cannot end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_in: u64,
}

impl AccessToken {
    /// Creates a token from the platform's response fields.
    pub fn new(value: impl Into<String>, expires_in: u64) -> Self {
        Self {
            value: value.into(),
            expires_in,
        }
    }

    /// The bearer string, for use as the `access_token` query parameter.
    pub fn secret(&self) -> &str {
        &self.value
    }

    /// Advertised lifetime in seconds.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
