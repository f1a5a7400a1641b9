//! Access token issuance.

use crate::WeChatClient;
use crate::response::{read_platform_json, required_str};
use serde_json::Value;
use tracing::{error, info, instrument};
use wxpress_core::{AccessToken, WeChatCredentials};
use wxpress_error::{PlatformFailure, WxpressError, WxpressErrorKind, WxpressResult};

impl WeChatClient {
    /// Requests a fresh access token for the application.
    ///
    /// Single attempt; a platform error is surfaced as a `Credential` error
    /// carrying the platform's `errcode`/`errmsg`.
    #[instrument(skip(self, credentials), fields(app_id = %credentials.app_id()))]
    pub async fn fetch_access_token(
        &self,
        credentials: &WeChatCredentials,
    ) -> WxpressResult<AccessToken> {
        let credential_error = |failure: PlatformFailure| {
            WxpressError::new(WxpressErrorKind::Credential(failure))
        };

        let response = self
            .http
            .get(self.endpoint("cgi-bin/token"))
            .query(&[
                ("grant_type", "client_credential"),
                ("appid", credentials.app_id()),
                ("secret", credentials.app_secret()),
            ])
            .send()
            .await
            .map_err(|e| {
                // the request URL carries the app secret
                let e = e.without_url();
                error!(error = %e, "Token request failed");
                credential_error(PlatformFailure::Transport(e.to_string()))
            })?;

        let body = read_platform_json(response).await.map_err(credential_error)?;
        let value = required_str(&body, "access_token").map_err(credential_error)?;
        let expires_in = body.get("expires_in").and_then(Value::as_u64).unwrap_or(0);

        info!(expires_in, "Obtained access token");
        Ok(AccessToken::new(value, expires_in))
    }
}
