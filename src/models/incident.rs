use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Incident severity. Variant order is the sort rank: LOW < MEDIUM < HIGH.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Incident lifecycle status.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Paused,
    Closed,
}

/// A trackable incident record.
///
/// `id` is assigned by the store and immutable; `created_at` is set once;
/// `updated_at` advances on every mutation and never decreases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: Status,
    /// Display name of the reporting account. A reference, not ownership;
    /// deleting a reporter does not touch their incidents.
    pub reporter: String,
    /// When the incident occurred (as opposed to when it was recorded).
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the client when creating an incident. The store
/// assigns id and timestamps; a missing status defaults to `not_started`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub status: Option<Status>,
    pub reporter: String,
    pub date: DateTime<Utc>,
}

/// Partial update body. Only fields present in the request are applied;
/// everything else is left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
    pub reporter: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl IncidentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.severity.is_none()
            && self.status.is_none()
            && self.reporter.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        let parsed: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn severity_ranks_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn status_defaults_to_not_started() {
        assert_eq!(Status::default(), Status::NotStarted);
        let parsed: Status = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(parsed, Status::InProgress);
    }

    #[test]
    fn empty_patch_detected() {
        assert!(IncidentPatch::default().is_empty());
        let patch = IncidentPatch {
            status: Some(Status::Closed),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
