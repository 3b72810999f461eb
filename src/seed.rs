//! Fixture data for this deployment.
//!
//! The credential store has no self-service registration; reporters are
//! seeded here at startup, before the listener binds. The incident list is
//! the demo dataset the service ships with.

use chrono::Utc;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::models::incident::{IncidentDraft, Severity, Status};
use crate::models::reporter::Reporter;
use crate::store::incidents::IncidentStore;
use crate::store::reporters::ReporterStore;

/// (username, display name, email, company, disabled)
const REPORTERS: &[(&str, &str, &str, &str, bool)] = &[
    ("john.doe", "John Doe", "john.doe@mail.com", "ABC", false),
    ("jane.doe", "Jane Doe", "jane.doe@mail.com", "ABC", true),
];

/// Fixture password shared by the seeded accounts. Demo deployment only.
const FIXTURE_PASSWORD: &str = "123456";

/// (title, description, severity, status, reporter display name)
type IncidentRow = (&'static str, &'static str, Severity, Status, &'static str);

const INCIDENTS: &[IncidentRow] = &[
    (
        "Network Outage",
        "A network outage has occurred in the main office.",
        Severity::High,
        Status::InProgress,
        "John Doe",
    ),
    (
        "Hardware Failure",
        "Multiple hardware components have malfunctioned.",
        Severity::Low,
        Status::NotStarted,
        "Michael Brown",
    ),
    (
        "Data Loss",
        "Critical data loss due to backup failure.",
        Severity::High,
        Status::InProgress,
        "Alice Johnson",
    ),
    (
        "Security Breach",
        "Unauthorized access to sensitive data.",
        Severity::High,
        Status::Paused,
        "Jane Smith",
    ),
    (
        "Software Bug",
        "A software bug has caused a system crash.",
        Severity::Medium,
        Status::NotStarted,
        "David White",
    ),
    (
        "Power Outage",
        "A power outage has occurred in the building.",
        Severity::Low,
        Status::Closed,
        "Chris Brown",
    ),
    (
        "System Failure",
        "A system failure has caused data corruption.",
        Severity::High,
        Status::InProgress,
        "Sarah Green",
    ),
    (
        "Server Crash",
        "A server crash has caused downtime.",
        Severity::High,
        Status::Closed,
        "Tom Wilson",
    ),
    (
        "Database Error",
        "A database error has caused data inconsistency.",
        Severity::Medium,
        Status::NotStarted,
        "Emily Davis",
    ),
    (
        "Application Failure",
        "An application failure has caused data loss.",
        Severity::High,
        Status::Paused,
        "Paul Taylor",
    ),
    (
        "Network Outage",
        "A network outage has occurred in the main office.",
        Severity::High,
        Status::Closed,
        "John Doe",
    ),
    (
        "Hardware Failure",
        "Multiple hardware components have malfunctioned.",
        Severity::Low,
        Status::InProgress,
        "Michael Brown",
    ),
    (
        "Data Loss",
        "Critical data loss due to backup failure.",
        Severity::High,
        Status::NotStarted,
        "Alice Johnson",
    ),
    (
        "Security Breach",
        "Unauthorized access to sensitive data.",
        Severity::High,
        Status::Closed,
        "Jane Smith",
    ),
    (
        "Software Bug",
        "A software bug has caused a system crash.",
        Severity::Medium,
        Status::InProgress,
        "David White",
    ),
    (
        "Power Outage",
        "A power outage has occurred in the building.",
        Severity::Low,
        Status::NotStarted,
        "Chris Brown",
    ),
    (
        "System Failure",
        "A system failure has caused data corruption.",
        Severity::High,
        Status::Paused,
        "Sarah Green",
    ),
    (
        "Server Crash",
        "A server crash has caused downtime.",
        Severity::High,
        Status::NotStarted,
        "Tom Wilson",
    ),
];

pub fn seed_reporters(store: &ReporterStore) {
    let now = Utc::now();
    let password_hash = hash_password(FIXTURE_PASSWORD);
    for (username, name, email, company, disabled) in REPORTERS {
        store.insert(Reporter {
            id: Uuid::new_v4(),
            username: (*username).into(),
            name: (*name).into(),
            email: (*email).into(),
            company: (*company).into(),
            password_hash: password_hash.clone(),
            disabled: *disabled,
            created_at: now,
            updated_at: now,
        });
    }
}

pub async fn seed_incidents(store: &IncidentStore) {
    for (title, description, severity, status, reporter) in INCIDENTS {
        store
            .create(IncidentDraft {
                title: (*title).into(),
                description: (*description).into(),
                severity: *severity,
                status: Some(*status),
                reporter: (*reporter).into(),
                date: Utc::now(),
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn seeded_reporters_have_verifiable_credentials() {
        let store = ReporterStore::new();
        seed_reporters(&store);
        assert_eq!(store.len(), 2);

        let john = store.find("john.doe").unwrap();
        assert!(!john.disabled);
        assert!(verify_password(FIXTURE_PASSWORD, &john.password_hash));

        let jane = store.find("jane.doe").unwrap();
        assert!(jane.disabled);
    }

    #[tokio::test]
    async fn seeded_incidents_cover_the_full_enum_space() {
        let store = IncidentStore::new();
        seed_incidents(&store).await;
        let all = store.snapshot().await;
        assert_eq!(all.len(), 18);

        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            assert!(all.iter().any(|i| i.severity == severity));
        }
        for status in [
            Status::NotStarted,
            Status::InProgress,
            Status::Paused,
            Status::Closed,
        ] {
            assert!(all.iter().any(|i| i.status == status));
        }
    }
}
