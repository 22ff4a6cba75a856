//! Category reference-data model.

use serde::Serialize;
use sqlx::FromRow;

use memo_core::types::{DbId, Timestamp};

/// Full category row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Compact category projection embedded in memo responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryInfo {
    pub id: DbId,
    pub name: String,
    pub color_code: String,
}
