//! HTTP client for the official account API.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Production API host.
pub const DEFAULT_API_BASE: &str = "https://api.weixin.qq.com";

/// Client for the official account API.
///
/// Cheap to clone; clones share the underlying connection pool. The client holds
/// no credentials or tokens, those are passed into each call.
#[derive(Debug, Clone)]
pub struct WeChatClient {
    pub(crate) http: Client,
    base_url: String,
}

impl WeChatClient {
    /// Creates a client against the production API with a 30 second timeout.
    pub fn new() -> WxpressResult<Self> {
        Self::with_base_url(DEFAULT_API_BASE, Duration::from_secs(30))
    }

    /// Creates a client against a custom API host.
    ///
    /// The timeout applies to each HTTP request as a whole.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn with_base_url(base_url: impl AsRef<str>, timeout: Duration) -> WxpressResult<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            WxpressError::new(WxpressErrorKind::Config(format!(
                "failed to build HTTP client: {}",
                e
            )))
        })?;

        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, ?timeout, "Created official account API client");

        Ok(Self { http, base_url })
    }

    /// Creates a client with an existing HTTP client.
    ///
    /// Use this to share a connection pool or to customise proxy and TLS settings.
    pub fn with_http_client(http: Client, base_url: impl AsRef<str>) -> Self {
        Self {
            http,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the API host this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
