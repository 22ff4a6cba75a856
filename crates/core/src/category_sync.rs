//! Pure diff for replacing a memo's category set.
//!
//! The association "sync" is replace-all: the submitted set becomes
//! authoritative. [`diff`] computes the minimal insert/delete sets; the
//! repository executes both inside one transaction so readers never see a
//! half-replaced set.

use std::collections::BTreeSet;

use crate::types::DbId;

/// Rows to insert and rows to delete to turn `current` into `desired`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub to_add: Vec<DbId>,
    pub to_remove: Vec<DbId>,
}

impl SyncPlan {
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute the plan that replaces `current` with `desired`.
///
/// Duplicates in either input are collapsed; output is sorted so the
/// repository's batch statements are deterministic.
pub fn diff(current: &[DbId], desired: &[DbId]) -> SyncPlan {
    let current: BTreeSet<DbId> = current.iter().copied().collect();
    let desired: BTreeSet<DbId> = desired.iter().copied().collect();

    SyncPlan {
        to_add: desired.difference(&current).copied().collect(),
        to_remove: current.difference(&desired).copied().collect(),
    }
}
