//! Platform response checks shared by every endpoint.

use reqwest::Response;
use serde_json::Value;
use tracing::{debug, error};
use wxpress_error::PlatformFailure;

/// Reads a platform response, checking HTTP status and then `errcode`.
pub(crate) async fn read_platform_json(response: Response) -> Result<Value, PlatformFailure> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| PlatformFailure::Transport(e.without_url().to_string()))?;

    if !status.is_success() {
        error!(status = %status, body = %body, "Platform returned non-success status");
        return Err(PlatformFailure::Status {
            status: status.as_u16(),
            body,
        });
    }

    let value: Value =
        serde_json::from_str(&body).map_err(|e| PlatformFailure::Decode(e.to_string()))?;
    check_errcode(value)
}

/// Fails when the body carries a non-zero `errcode`.
pub(crate) fn check_errcode(value: Value) -> Result<Value, PlatformFailure> {
    match value.get("errcode").and_then(Value::as_i64) {
        Some(errcode) if errcode != 0 => {
            let errmsg = value
                .get("errmsg")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            error!(errcode, errmsg = %errmsg, "Platform reported an error");
            Err(PlatformFailure::Api { errcode, errmsg })
        }
        _ => {
            debug!("Platform response accepted");
            Ok(value)
        }
    }
}

/// Extracts a required non-empty string field from a success body.
pub(crate) fn required_str(value: &Value, field: &'static str) -> Result<String, PlatformFailure> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(PlatformFailure::MissingField(field))
}
