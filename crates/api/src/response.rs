//! Shared response envelope types for API handlers.
//!
//! Mutation endpoints use a `{ "status", "message", "data" }` envelope;
//! lifecycle endpoints (delete, restore, destroy) return `{ "message" }`;
//! paginated listings return page metadata alongside the rows. Use these
//! types instead of ad-hoc `serde_json::json!` to get compile-time type
//! safety and consistent serialization.

use serde::Serialize;

/// `{ "status": "success", "message": ..., "data": T }` envelope used by
/// mutation endpoints and the category listing.
#[derive(Debug, Serialize)]
pub struct StatusResponse<T: Serialize> {
    pub status: &'static str,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> StatusResponse<T> {
    pub fn success(message: &'static str, data: T) -> Self {
        Self {
            status: "success",
            message,
            data,
        }
    }
}

/// Bare `{ "message": ... }` body for lifecycle endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// One page of results plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
}

impl<T: Serialize> Paginated<T> {
    /// Assemble a page. `last_page` is at least 1 even for an empty set.
    pub fn new(data: Vec<T>, current_page: i64, per_page: i64, total: i64) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        Self {
            data,
            current_page,
            per_page,
            total,
            last_page,
        }
    }
}
