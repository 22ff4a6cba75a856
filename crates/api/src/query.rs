//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameter (`?page=N`, 1-based).
///
/// A missing or sub-1 value is treated as page 1.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}
