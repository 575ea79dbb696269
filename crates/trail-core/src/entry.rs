use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged action, as stored and served by the audit trail server.
///
/// The client never mutates an entry after it is built: operations borrow it
/// and serialize it as-is. Retention and persistence belong to the server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditTrailEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Free-form tag such as `CREATE` or `DELETE`.
    pub action_type: String,
    pub entity_name: String,
    pub entity_id: Uuid,
    /// Opaque payload describing the change. Never interpreted client-side.
    pub change_data: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditTrailEntry {
    /// Build an entry with a client-generated id (UUID v7) stamped with the
    /// current UTC time.
    #[must_use]
    pub fn new(
        user_id: Uuid,
        action_type: impl Into<String>,
        entity_name: impl Into<String>,
        entity_id: Uuid,
        change_data: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            action_type: action_type.into(),
            entity_name: entity_name.into(),
            entity_id,
            change_data: change_data.into(),
            timestamp: Utc::now(),
        }
    }
}
