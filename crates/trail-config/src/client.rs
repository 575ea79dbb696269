//! Connection settings for the audit trail server.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default per-call timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("trail-client/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Server base URL without trailing slash (e.g., `https://audit.internal/api`).
    #[serde(default)]
    pub base_url: String,

    /// Bearer token sent in the `Authorization` header.
    #[serde(default)]
    pub token: String,

    /// API key sent in the `X-API-Key` header.
    #[serde(default)]
    pub api_key: String,

    /// Per-call timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

// Credentials stay out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &redact(&self.token))
            .field("api_key", &redact(&self.api_key))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

const fn redact(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "***" }
}

impl ClientConfig {
    /// Check if the base URL and both credentials are set.
    pub fn is_configured(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Name of the first required field that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.base_url.trim().is_empty() {
            Some("base_url")
        } else if self.token.is_empty() {
            Some("token")
        } else if self.api_key.is_empty() {
            Some("api_key")
        } else {
            None
        }
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that would produce a client unable to make any call.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout or a base URL
    /// without an `http://` or `https://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !self.base_url.is_empty()
            && !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "client.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(())
    }
}
