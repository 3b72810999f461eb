//! Credential store: reporter records keyed by username.
//!
//! Populated once at startup from fixture data; there is no update path, so
//! usernames are immutable after seeding. Lookups clone the record out;
//! callers never hold a reference into the map.

use std::sync::Arc;

use dashmap::DashMap;

use crate::models::reporter::Reporter;

/// Shared, cheaply-cloneable reporter store.
#[derive(Clone, Default)]
pub struct ReporterStore {
    records: Arc<DashMap<String, Reporter>>,
}

impl ReporterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a reporter. Usernames are unique: seeding the same username
    /// twice replaces the record, which fixture data never does.
    pub fn insert(&self, reporter: Reporter) {
        self.records.insert(reporter.username.clone(), reporter);
    }

    pub fn find(&self, username: &str) -> Option<Reporter> {
        self.records.get(username).map(|r| r.value().clone())
    }

    /// All reporters, ordered by username so pagination is deterministic.
    pub fn list(&self) -> Vec<Reporter> {
        let mut all: Vec<Reporter> = self.records.iter().map(|r| r.value().clone()).collect();
        all.sort_by(|a, b| a.username.cmp(&b.username));
        all
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
