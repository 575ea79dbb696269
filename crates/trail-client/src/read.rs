//! Reading entries back.

use chrono::{DateTime, Utc};
use reqwest::{Method, header::CONTENT_TYPE};
use trail_core::{AuditTrailEntry, AuditTrailFilter};
use uuid::Uuid;

use crate::{AuditTrailClient, endpoint::Endpoint, error::TrailError, http::read_entries};

impl AuditTrailClient {
    /// Entries recorded against one entity instance.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError`] if the request fails, the server returns a
    /// non-success status, or the body is not a JSON array of entries.
    pub async fn get_audit_trail_by_entity_id(
        &self,
        entity_id: Uuid,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.get_entries(&Endpoint::ByEntityId(entity_id)).await
    }

    /// Entries recorded for actions taken by one user.
    ///
    /// # Errors
    ///
    /// See [`Self::get_audit_trail_by_entity_id`].
    pub async fn get_audit_trail_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.get_entries(&Endpoint::ByUserId(user_id)).await
    }

    /// Entries with a timestamp between `start` and `end`.
    ///
    /// Both bounds are sent with second precision.
    ///
    /// # Errors
    ///
    /// See [`Self::get_audit_trail_by_entity_id`].
    pub async fn get_audit_trail_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.get_entries(&Endpoint::ByDateRange { start, end }).await
    }

    /// Entries with the given action type. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidSegment`] without sending anything if
    /// `action_type` trims to an empty string, `.` or `..`, otherwise as
    /// [`Self::get_audit_trail_by_entity_id`].
    pub async fn get_audit_trail_by_action_type(
        &self,
        action_type: &str,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.get_entries(&Endpoint::ByActionType(action_type)).await
    }

    /// Entries recorded against one resource type. Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// As [`Self::get_audit_trail_by_action_type`].
    pub async fn get_audit_trail_by_entity_name(
        &self,
        entity_name: &str,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.get_entries(&Endpoint::ByEntityName(entity_name)).await
    }

    /// Entries matching every constraint present in `filter`.
    ///
    /// Sent as a POST with the filter as JSON body, so no query-string
    /// encoding is involved. An empty filter places no constraint.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Encode`] if the filter cannot be serialized,
    /// otherwise as [`Self::get_audit_trail_by_entity_id`].
    pub async fn get_filtered_audit_trail(
        &self,
        filter: &AuditTrailFilter,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        let body = serde_json::to_vec(filter).map_err(TrailError::Encode)?;
        let resp = self
            .request(Method::POST, &Endpoint::Filtered)?
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        read_entries(resp).await
    }

    async fn get_entries(
        &self,
        endpoint: &Endpoint<'_>,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        let resp = self.request(Method::GET, endpoint)?.send().await?;
        read_entries(resp).await
    }
}
