//! Incident query engine: filter → sort → paginate, in that order.
//!
//! The pipeline order is a contract: pagination over an unsorted set, or
//! filtering after pagination, changes observable results. The engine works
//! on a store snapshot and reports the match count before pagination so
//! callers can compute page counts.

use std::cmp::Ordering;

use crate::models::incident::{Incident, Severity, Status};
use crate::models::pagination::PageParams;

/// Optional filters, AND-combined. An absent filter means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct IncidentFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Case-insensitive substring match on the description.
    pub description: Option<String>,
    /// Case-insensitive substring match on the reporter display name.
    pub reporter: Option<String>,
    /// Exact severity match.
    pub severity: Option<Severity>,
    /// Exact status match.
    pub status: Option<Status>,
}

impl IncidentFilter {
    fn matches(&self, incident: &Incident) -> bool {
        fn contains_ci(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }

        if let Some(ref title) = self.title {
            if !contains_ci(&incident.title, title) {
                return false;
            }
        }
        if let Some(ref description) = self.description {
            if !contains_ci(&incident.description, description) {
                return false;
            }
        }
        if let Some(ref reporter) = self.reporter {
            if !contains_ci(&incident.reporter, reporter) {
                return false;
            }
        }
        if let Some(severity) = self.severity {
            if incident.severity != severity {
                return false;
            }
        }
        if let Some(status) = self.status {
            if incident.status != status {
                return false;
            }
        }
        true
    }
}

/// The sortable incident fields. Unknown `sort_by` values fall back to
/// `CreatedAt` at the parse boundary, never at comparison time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Reporter,
    Severity,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some("title") => SortKey::Title,
            Some("reporter") => SortKey::Reporter,
            Some("severity") => SortKey::Severity,
            Some("created_at") => SortKey::CreatedAt,
            Some("updated_at") => SortKey::UpdatedAt,
            _ => SortKey::CreatedAt,
        }
    }

    fn compare(&self, a: &Incident, b: &Incident) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Reporter => a.reporter.cmp(&b.reporter),
            SortKey::Severity => a.severity.cmp(&b.severity),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Sort direction: `1` ascending, `-1` descending. Anything else falls back
/// to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse_or_default(raw: Option<i64>) -> Self {
        match raw {
            Some(1) => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Run the filter → sort → paginate pipeline over a snapshot.
///
/// Returns the requested page and the total match count before pagination.
/// Sorting is stable in both directions: records with equal keys keep their
/// insertion order (descending flips the comparator instead of reversing
/// the sorted list, which would flip ties too).
pub fn search(
    snapshot: Vec<Incident>,
    filter: &IncidentFilter,
    key: SortKey,
    order: SortOrder,
    page: PageParams,
) -> (Vec<Incident>, usize) {
    let mut matches: Vec<Incident> = snapshot
        .into_iter()
        .filter(|incident| filter.matches(incident))
        .collect();

    matches.sort_by(|a, b| match order {
        SortOrder::Asc => key.compare(a, b),
        SortOrder::Desc => key.compare(b, a),
    });

    let total = matches.len();
    let data = matches
        .into_iter()
        .skip(page.skip.unwrap_or(0))
        .take(page.limit.unwrap_or(usize::MAX))
        .collect();

    (data, total)
}
