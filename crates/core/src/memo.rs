//! Memo lifecycle state.

use serde::Serialize;

use crate::types::Timestamp;

/// Lifecycle state of a memo, derived from the `deleted_at` column.
///
/// The nullable timestamp is a tagged state, not a boolean: a memo is
/// either live or in the trash, and every query targets exactly one of
/// the two views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoState {
    Active,
    Trashed,
}

impl MemoState {
    /// Derive the state from a `deleted_at` value.
    pub fn from_deleted_at(deleted_at: Option<Timestamp>) -> Self {
        match deleted_at {
            None => MemoState::Active,
            Some(_) => MemoState::Trashed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_derivation() {
        assert_eq!(MemoState::from_deleted_at(None), MemoState::Active);
        assert_eq!(
            MemoState::from_deleted_at(Some(chrono::Utc::now())),
            MemoState::Trashed
        );
    }
}
