//! Server configuration.
//!
//! Loaded from the TOML file named by `WXPRESS_CONFIG`. Every key has a
//! default, so the file and each section are optional. Credentials are not
//! part of this file.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use typed_builder::TypedBuilder;
use wxpress_error::{WxpressError, WxpressErrorKind, WxpressResult};

/// Environment variable naming the configuration file.
pub const CONFIG_VAR: &str = "WXPRESS_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
#[serde(default)]
pub struct ServerConfig {
    /// Protocol-facing identity
    #[builder(default)]
    server: ServerSection,
    /// Platform API client
    #[builder(default)]
    wechat: WeChatSection,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
#[serde(default)]
pub struct ServerSection {
    /// Name reported to protocol clients
    #[builder(default = "wxpress".to_string(), setter(into))]
    name: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// `[wechat]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
#[serde(default)]
pub struct WeChatSection {
    /// API host
    #[builder(default = wxpress_wechat::DEFAULT_API_BASE.to_string(), setter(into))]
    api_base_url: String,
    /// Whole-request HTTP timeout in seconds
    #[builder(default = 30)]
    timeout_secs: u64,
}

impl Default for WeChatSection {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WeChatSection {
    /// HTTP timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[tracing::instrument(skip_all, fields(file = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> WxpressResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WxpressError::new(WxpressErrorKind::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            )))
        })?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> WxpressResult<Self> {
        toml::from_str(content).map_err(|e| {
            WxpressError::new(WxpressErrorKind::Config(format!(
                "Failed to parse config: {}",
                e
            )))
        })
    }

    /// Loads the file named by `WXPRESS_CONFIG`, or defaults when it is unset.
    pub fn load() -> WxpressResult<Self> {
        match std::env::var_os(CONFIG_VAR) {
            Some(path) if !path.is_empty() => {
                tracing::info!(path = %Path::new(&path).display(), "Loading configuration");
                Self::from_file(path)
            }
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
