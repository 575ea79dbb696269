use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional constraints for the filtered audit trail query.
///
/// Each field is independent: `None` means "no constraint on this dimension"
/// and is omitted from the request body, so the server can tell it apart from
/// an explicit empty string. The server ANDs together whatever is present.
///
/// Keys go out in the server's own spelling (`UserID`, `ActionType`, ...).
/// camelCase keys are accepted when reading a filter back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct AuditTrailFilter {
    #[serde(rename = "UserID", alias = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(
        rename = "ActionType",
        alias = "actionType",
        skip_serializing_if = "Option::is_none"
    )]
    pub action_type: Option<String>,
    #[serde(
        rename = "EntityName",
        alias = "entityName",
        skip_serializing_if = "Option::is_none"
    )]
    pub entity_name: Option<String>,
    #[serde(rename = "StartDate", alias = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "EndDate", alias = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl AuditTrailFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn with_action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = Some(action_type.into());
        self
    }

    #[must_use]
    pub fn with_entity_name(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }

    /// Constrain to entries at or after `start` and at or before `end`.
    #[must_use]
    pub fn with_date_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// `true` when no dimension is constrained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.action_type.is_none()
            && self.entity_name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted() {
        let filter = AuditTrailFilter::new().with_action_type("DELETE");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, json!({ "ActionType": "DELETE" }));
    }

    #[test]
    fn empty_string_is_kept_distinct_from_absent() {
        let filter = AuditTrailFilter::new().with_entity_name("");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, json!({ "EntityName": "" }));

        let back: AuditTrailFilter = serde_json::from_value(json).unwrap();
        assert_eq!(back.entity_name.as_deref(), Some(""));
        assert!(back.action_type.is_none());
    }

    #[test]
    fn empty_filter_serializes_to_empty_object() {
        let filter = AuditTrailFilter::new();
        assert!(filter.is_empty());
        assert_eq!(serde_json::to_string(&filter).unwrap(), "{}");
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let raw = r#"{"UserID":null,"ActionType":"CREATE","EntityName":null}"#;
        let filter: AuditTrailFilter = serde_json::from_str(raw).unwrap();
        assert_eq!(filter, AuditTrailFilter::new().with_action_type("CREATE"));
    }

    #[test]
    fn keys_use_server_spelling() {
        let user = Uuid::parse_str("6f1c9a52-3b7e-4d21-9a0c-5e8f7d6b4a31").unwrap();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let filter = AuditTrailFilter::new()
            .with_user_id(user)
            .with_action_type("UPDATE")
            .with_entity_name("invoice")
            .with_date_range(start, end);

        assert!(!filter.is_empty());
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "UserID": "6f1c9a52-3b7e-4d21-9a0c-5e8f7d6b4a31",
                "ActionType": "UPDATE",
                "EntityName": "invoice",
                "StartDate": "2024-01-01T00:00:00Z",
                "EndDate": "2024-01-31T23:59:59Z",
            })
        );
    }

    #[test]
    fn camel_case_keys_are_accepted_on_read() {
        let raw = r#"{"userId":"6f1c9a52-3b7e-4d21-9a0c-5e8f7d6b4a31","entityName":"invoice"}"#;
        let filter: AuditTrailFilter = serde_json::from_str(raw).unwrap();
        assert_eq!(filter.entity_name.as_deref(), Some("invoice"));
        assert!(filter.user_id.is_some());

        let json = serde_json::to_value(&filter).unwrap();
        assert!(json.get("UserID").is_some());
        assert!(json.get("userId").is_none());
    }
}
