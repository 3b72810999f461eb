use serde::{Deserialize, Serialize};

/// Pagination query parameters. `skip` discards the first N matches,
/// `limit` caps what remains; both are applied after filtering and sorting.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// Listing envelope: one page of records plus the match count before
/// pagination, so callers can compute page counts.
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

impl<T> Page<T> {
    /// Assemble the response envelope the way the listing endpoints report
    /// it: `skip` echoes the request (default 0) and `limit` echoes the
    /// request, or the pre-pagination total when unbounded.
    pub fn new(data: Vec<T>, total: usize, params: PageParams) -> Self {
        Self {
            data,
            total,
            skip: params.skip.unwrap_or(0),
            limit: params.limit.unwrap_or(total),
        }
    }
}
