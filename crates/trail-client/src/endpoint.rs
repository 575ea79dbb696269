//! Server endpoints and their path rendering.
//!
//! Free-text values are trimmed and percent-encoded, so reserved characters
//! such as `/` or `?` stay inside a single path segment. Values that would
//! still collapse under URL normalization (empty, `.`, `..`) are rejected.
//! UUIDs render hyphenated and timestamps as RFC3339 with second precision
//! and a `Z` suffix; both only use characters legal in a path segment.

use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::TrailError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    LogAction,
    ByEntityId(Uuid),
    ByUserId(Uuid),
    ByDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    ByActionType(&'a str),
    ByEntityName(&'a str),
    Filtered,
}

impl Endpoint<'_> {
    /// Path relative to the client's base URL, starting with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidSegment`] if a free-text value trims to
    /// an empty string, `.` or `..`.
    pub fn path(&self) -> Result<String, TrailError> {
        let path = match self {
            Self::LogAction => "/log-action".to_string(),
            Self::ByEntityId(id) => format!("/audit-trail/entity/{}", id.hyphenated()),
            Self::ByUserId(id) => format!("/audit-trail/user/{}", id.hyphenated()),
            Self::ByDateRange { start, end } => format!(
                "/audit-trail/date-range/{}/{}",
                time_segment(start),
                time_segment(end)
            ),
            Self::ByActionType(action) => {
                format!("/audit-trail/action-type/{}", text_segment(action)?)
            }
            Self::ByEntityName(name) => {
                format!("/audit-trail/entity-name/{}", text_segment(name)?)
            }
            Self::Filtered => "/getFilteredAuditTrail".to_string(),
        };
        Ok(path)
    }
}

fn time_segment(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn text_segment(value: &str) -> Result<Cow<'_, str>, TrailError> {
    let trimmed = value.trim();
    if matches!(trimmed, "" | "." | "..") {
        return Err(TrailError::InvalidSegment {
            value: value.to_string(),
        });
    }
    Ok(urlencoding::encode(trimmed))
}
