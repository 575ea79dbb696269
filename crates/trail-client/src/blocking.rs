//! Synchronous wrapper around [`crate::AuditTrailClient`].
//!
//! Each call blocks the calling thread for one round trip on a private
//! current-thread runtime. Do not call these methods from inside an async
//! runtime; use the async client there.

use chrono::{DateTime, Utc};
use tokio::runtime::Runtime;
use trail_config::ClientConfig;
use trail_core::{AuditTrailEntry, AuditTrailFilter};
use uuid::Uuid;

use crate::error::TrailError;

#[derive(Debug)]
pub struct AuditTrailClient {
    inner: crate::AuditTrailClient,
    runtime: Runtime,
}

impl AuditTrailClient {
    /// Create a blocking client with the default transport (10 s timeout).
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Http`] if the transport fails to build and
    /// [`TrailError::Runtime`] if the runtime cannot start.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TrailError> {
        Self::from_async(crate::AuditTrailClient::new(base_url, token, api_key)?)
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::from_config`]; additionally
    /// [`TrailError::Runtime`] if the runtime cannot start.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TrailError> {
        Self::from_async(crate::AuditTrailClient::from_config(config)?)
    }

    /// Wrap an existing async client, e.g. one built with
    /// [`crate::AuditTrailClient::with_http`].
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Runtime`] if the runtime cannot start.
    pub fn from_async(inner: crate::AuditTrailClient) -> Result<Self, TrailError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(TrailError::Runtime)?;
        Ok(Self { inner, runtime })
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::log_action`].
    pub fn log_action(&self, entry: &AuditTrailEntry) -> Result<bool, TrailError> {
        self.runtime.block_on(self.inner.log_action(entry))
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::get_audit_trail_by_entity_id`].
    pub fn get_audit_trail_by_entity_id(
        &self,
        entity_id: Uuid,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.runtime
            .block_on(self.inner.get_audit_trail_by_entity_id(entity_id))
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::get_audit_trail_by_user_id`].
    pub fn get_audit_trail_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.runtime
            .block_on(self.inner.get_audit_trail_by_user_id(user_id))
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::get_audit_trail_by_date_range`].
    pub fn get_audit_trail_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.runtime
            .block_on(self.inner.get_audit_trail_by_date_range(start, end))
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::get_audit_trail_by_action_type`].
    pub fn get_audit_trail_by_action_type(
        &self,
        action_type: &str,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.runtime
            .block_on(self.inner.get_audit_trail_by_action_type(action_type))
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::get_audit_trail_by_entity_name`].
    pub fn get_audit_trail_by_entity_name(
        &self,
        entity_name: &str,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.runtime
            .block_on(self.inner.get_audit_trail_by_entity_name(entity_name))
    }

    /// # Errors
    ///
    /// See [`crate::AuditTrailClient::get_filtered_audit_trail`].
    pub fn get_filtered_audit_trail(
        &self,
        filter: &AuditTrailFilter,
    ) -> Result<Vec<AuditTrailEntry>, TrailError> {
        self.runtime
            .block_on(self.inner.get_filtered_audit_trail(filter))
    }
}
