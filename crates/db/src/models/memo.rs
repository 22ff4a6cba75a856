//! Memo entity model and DTOs.

use sqlx::FromRow;

use memo_core::memo::MemoState;
use memo_core::types::{DbId, Timestamp};

/// Full memo row from the `memos` table.
#[derive(Debug, Clone, FromRow)]
pub struct Memo {
    pub id: DbId,
    pub user_id: DbId,
    pub title: Option<String>,
    pub content: String,
    pub deadline_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Memo {
    /// Lifecycle state derived from `deleted_at`.
    pub fn state(&self) -> MemoState {
        MemoState::from_deleted_at(self.deleted_at)
    }
}

/// DTO for inserting a memo. The deadline is already a UTC instant.
#[derive(Debug)]
pub struct CreateMemo {
    pub title: Option<String>,
    pub content: String,
    pub deadline_at: Option<Timestamp>,
}

/// DTO for updating a memo.
///
/// All fields are authoritative: `deadline_at: None` clears any stored
/// deadline rather than keeping the previous value.
#[derive(Debug)]
pub struct UpdateMemo {
    pub title: Option<String>,
    pub content: String,
    pub deadline_at: Option<Timestamp>,
}
