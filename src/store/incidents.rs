//! Incident store: a guarded, insertion-ordered collection.
//!
//! All mutations run under the write lock for their full duration, so
//! readers never observe a half-applied update and two concurrent creates
//! cannot interleave. Listing reads clone a snapshot under the read lock
//! and proceed without blocking writers.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::incident::{Incident, IncidentDraft, IncidentPatch};

/// Shared, cheaply-cloneable incident store.
#[derive(Clone, Default)]
pub struct IncidentStore(Arc<RwLock<Vec<Incident>>>);

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an incident from validated fields. Assigns a fresh id, sets
    /// `created_at == updated_at`, and defaults a missing status.
    pub async fn create(&self, draft: IncidentDraft) -> Incident {
        let now = Utc::now();
        let incident = Incident {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            severity: draft.severity,
            status: draft.status.unwrap_or_default(),
            reporter: draft.reporter,
            date: draft.date,
            created_at: now,
            updated_at: now,
        };
        self.0.write().await.push(incident.clone());
        incident
    }

    pub async fn get(&self, id: Uuid) -> Option<Incident> {
        self.0.read().await.iter().find(|i| i.id == id).cloned()
    }

    /// Apply a partial update: only fields present in the patch are
    /// touched. The whole merge happens under one write-lock hold.
    /// Returns `None` if the id is unknown.
    pub async fn update(&self, id: Uuid, patch: IncidentPatch) -> Option<Incident> {
        let mut records = self.0.write().await;
        let incident = records.iter_mut().find(|i| i.id == id)?;

        if let Some(title) = patch.title {
            incident.title = title;
        }
        if let Some(description) = patch.description {
            incident.description = description;
        }
        if let Some(severity) = patch.severity {
            incident.severity = severity;
        }
        if let Some(status) = patch.status {
            incident.status = status;
        }
        if let Some(reporter) = patch.reporter {
            incident.reporter = reporter;
        }
        if let Some(date) = patch.date {
            incident.date = date;
        }
        // Monotonic even if the wall clock stepped backwards.
        incident.updated_at = Utc::now().max(incident.updated_at);

        Some(incident.clone())
    }

    /// Remove a record. Returns false if the id is unknown; the store is
    /// left unchanged in that case.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut records = self.0.write().await;
        let before = records.len();
        records.retain(|i| i.id != id);
        records.len() < before
    }

    /// Consistent point-in-time copy for the query engine. Insertion order
    /// is preserved; stable sorting depends on it.
    pub async fn snapshot(&self) -> Vec<Incident> {
        self.0.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }
}
