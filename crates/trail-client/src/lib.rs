//! # trail-client
//!
//! HTTP client for the audit trail service.
//!
//! Every call is one HTTP round trip carrying two credentials:
//! `Authorization: Bearer <token>` and `X-API-Key: <api key>`.
//!
//! - [`AuditTrailClient::log_action`] records one entry (`POST /log-action`)
//! - `get_audit_trail_by_*` read entries by entity, user, date range,
//!   action type or entity name (`GET /audit-trail/...`)
//! - [`AuditTrailClient::get_filtered_audit_trail`] reads entries matching an
//!   [`AuditTrailFilter`] (`POST /getFilteredAuditTrail`)
//!
//! [`blocking::AuditTrailClient`] wraps the same operations for callers without
//! an async runtime.

pub mod blocking;
mod endpoint;
mod error;
mod http;
mod read;
mod write;

pub use error::TrailError;
pub use trail_core::{AuditTrailEntry, AuditTrailFilter};

use std::fmt;
use std::time::Duration;

use trail_config::ClientConfig;

use crate::endpoint::Endpoint;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Per-call timeout of the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("trail-client/", env!("CARGO_PKG_VERSION"));

/// Client for one audit trail server.
///
/// Immutable after construction. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct AuditTrailClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    api_key: String,
}

impl fmt::Debug for AuditTrailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditTrailClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AuditTrailClient {
    /// Create a client with the default transport (10 s timeout).
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TrailError> {
        let http = build_http(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)?;
        Ok(Self::with_http(base_url, token, api_key, http))
    }

    /// Create a client on a caller-supplied transport.
    ///
    /// Trailing slashes are stripped from `base_url` so endpoint paths can be
    /// appended directly.
    #[must_use]
    pub fn with_http(
        base_url: impl Into<String>,
        token: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        let mut base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed);

        Self {
            http,
            base_url,
            token: token.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::NotConfigured`] if the base URL or a credential is
    /// empty, [`TrailError::Config`] if a value is invalid, and
    /// [`TrailError::Http`] if the transport fails to build.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TrailError> {
        if let Some(field) = config.missing_field() {
            return Err(TrailError::NotConfigured { field });
        }
        config.validate()?;

        let http = build_http(config.timeout(), &config.user_agent)?;
        Ok(Self::with_http(
            config.base_url.trim(),
            config.token.as_str(),
            config.api_key.as_str(),
            http,
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request to `endpoint` with both credential headers attached.
    fn request(
        &self,
        method: reqwest::Method,
        endpoint: &Endpoint<'_>,
    ) -> Result<reqwest::RequestBuilder, TrailError> {
        let path = endpoint.path()?;
        tracing::debug!(%method, %path, "audit trail request");
        Ok(self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
            .header(API_KEY_HEADER, &self.api_key))
    }
}

fn build_http(timeout: Duration, user_agent: &str) -> Result<reqwest::Client, TrailError> {
    Ok(reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?)
}
