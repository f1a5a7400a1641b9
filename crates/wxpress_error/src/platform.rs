//! Platform-side failure details shared by every outbound call.

use derive_more::Display;

/// Why a call against the publishing platform did not produce a usable result.
///
/// The platform reports application errors as an `errcode`/`errmsg` pair in the
/// JSON body regardless of the HTTP status, so both layers are represented here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum PlatformFailure {
    /// The HTTP status was not a success status.
    #[display("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// The body carried a non-zero `errcode`.
    #[display("errcode {errcode}: {errmsg}")]
    Api {
        /// Platform error code
        errcode: i64,
        /// Platform error message
        errmsg: String,
    },

    /// A success response lacked a required field.
    #[display("{} missing", _0)]
    MissingField(&'static str),

    /// The request never produced a response.
    #[display("request failed: {}", _0)]
    Transport(String),

    /// The response body was not the expected JSON.
    #[display("invalid response: {}", _0)]
    Decode(String),
}

impl PlatformFailure {
    /// Returns the platform error code, if the platform reported one.
    pub fn errcode(&self) -> Option<i64> {
        match self {
            Self::Api { errcode, .. } => Some(*errcode),
            _ => None,
        }
    }
}
