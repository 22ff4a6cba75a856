//! Domain logic for the memo backend.
//!
//! Pure, database-free building blocks shared by `memo-db` and `memo-api`:
//! the error taxonomy, id/timestamp aliases, field-level validation,
//! deadline/timestamp timezone handling, and the category-sync diff.

pub mod category_sync;
pub mod datetime;
pub mod error;
pub mod memo;
pub mod types;
pub mod validation;
