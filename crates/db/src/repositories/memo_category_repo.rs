//! Repository for the `memo_category` join table.
//!
//! The only write operation is [`MemoCategoryRepo::sync`]: replace-all
//! semantics computed as a pure diff and applied inside one transaction,
//! so a concurrent reader never observes a partially-replaced set.

use sqlx::{FromRow, PgPool};

use memo_core::category_sync::{self, SyncPlan};
use memo_core::types::DbId;

use crate::models::category::CategoryInfo;

/// One joined (memo, category) pair, used to batch-load categories for a
/// whole listing with a single query.
#[derive(Debug, Clone, FromRow)]
pub struct MemoCategoryInfo {
    pub memo_id: DbId,
    pub id: DbId,
    pub name: String,
    pub color_code: String,
}

/// Provides association operations between memos and categories.
pub struct MemoCategoryRepo;

impl MemoCategoryRepo {
    /// Replace a memo's category set with `desired`.
    ///
    /// Locks the memo's current association rows, diffs them against the
    /// desired set, and applies the batch delete + insert in the same
    /// transaction. Returns the executed plan.
    pub async fn sync(
        pool: &PgPool,
        memo_id: DbId,
        desired: &[DbId],
    ) -> Result<SyncPlan, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Vec<DbId> = sqlx::query_scalar(
            "SELECT category_id FROM memo_category WHERE memo_id = $1 FOR UPDATE",
        )
        .bind(memo_id)
        .fetch_all(&mut *tx)
        .await?;

        let plan = category_sync::diff(&current, desired);

        if !plan.to_remove.is_empty() {
            sqlx::query("DELETE FROM memo_category WHERE memo_id = $1 AND category_id = ANY($2)")
                .bind(memo_id)
                .bind(&plan.to_remove)
                .execute(&mut *tx)
                .await?;
        }

        if !plan.to_add.is_empty() {
            sqlx::query(
                "INSERT INTO memo_category (memo_id, category_id)
                 SELECT $1, unnest($2::bigint[])",
            )
            .bind(memo_id)
            .bind(&plan.to_add)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(plan)
    }

    /// List a single memo's categories, ordered by category id.
    pub async fn list_for_memo(
        pool: &PgPool,
        memo_id: DbId,
    ) -> Result<Vec<CategoryInfo>, sqlx::Error> {
        sqlx::query_as::<_, CategoryInfo>(
            "SELECT c.id, c.name, c.color_code
             FROM memo_category mc
             JOIN categories c ON c.id = mc.category_id
             WHERE mc.memo_id = $1
             ORDER BY c.id",
        )
        .bind(memo_id)
        .fetch_all(pool)
        .await
    }

    /// Batch-load categories for a set of memos with one query.
    pub async fn list_for_memos(
        pool: &PgPool,
        memo_ids: &[DbId],
    ) -> Result<Vec<MemoCategoryInfo>, sqlx::Error> {
        if memo_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, MemoCategoryInfo>(
            "SELECT mc.memo_id, c.id, c.name, c.color_code
             FROM memo_category mc
             JOIN categories c ON c.id = mc.category_id
             WHERE mc.memo_id = ANY($1)
             ORDER BY mc.memo_id, c.id",
        )
        .bind(memo_ids)
        .fetch_all(pool)
        .await
    }
}
