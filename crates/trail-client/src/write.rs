//! Recording entries.

use reqwest::{Method, StatusCode, header::CONTENT_TYPE};
use trail_core::AuditTrailEntry;

use crate::{AuditTrailClient, endpoint::Endpoint, error::TrailError};

impl AuditTrailClient {
    /// Record one entry on the server.
    ///
    /// Returns `Ok(true)` only when the server answers `201 Created`. Any other
    /// status means the server received the entry but did not accept it and
    /// returns `Ok(false)`. The entry is sent once: no retry, no idempotency
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Encode`] if the entry cannot be serialized and
    /// [`TrailError::Http`] if the request cannot be sent.
    pub async fn log_action(&self, entry: &AuditTrailEntry) -> Result<bool, TrailError> {
        let body = serde_json::to_vec(entry).map_err(TrailError::Encode)?;
        let resp = self
            .request(Method::POST, &Endpoint::LogAction)?
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::CREATED {
            return Ok(true);
        }

        tracing::warn!(
            status = status.as_u16(),
            entry_id = %entry.id,
            action_type = %entry.action_type,
            "audit trail entry not accepted"
        );
        Ok(false)
    }
}
