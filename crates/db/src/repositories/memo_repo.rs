//! Repository for the `memos` table.
//!
//! Every query targets exactly one lifecycle view: active rows
//! (`deleted_at IS NULL`) or trashed rows (`deleted_at IS NOT NULL`).
//! A memo in the wrong view behaves as if it did not exist, which is how
//! the service layer turns wrong-state access into 404s.

use sqlx::PgPool;

use memo_core::types::DbId;

use crate::models::memo::{CreateMemo, Memo, UpdateMemo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, title, content, deadline_at, deleted_at, created_at, updated_at";

/// A page of memos plus the total row count for pagination metadata.
#[derive(Debug)]
pub struct MemoPage {
    pub memos: Vec<Memo>,
    pub total: i64,
}

/// Provides CRUD and lifecycle operations for memos.
pub struct MemoRepo;

impl MemoRepo {
    /// Insert a new memo owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateMemo,
    ) -> Result<Memo, sqlx::Error> {
        let query = format!(
            "INSERT INTO memos (user_id, title, content, deadline_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.deadline_at)
            .fetch_one(pool)
            .await
    }

    /// Find an active memo by id, regardless of owner.
    ///
    /// Ownership is checked by the caller so it can distinguish 403 from 404.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memos WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a trashed memo by id, regardless of owner.
    pub async fn find_trashed_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Memo>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM memos WHERE id = $1 AND deleted_at IS NOT NULL");
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's active memos, most recently updated first.
    pub async fn list_active(pool: &PgPool, user_id: DbId) -> Result<Vec<Memo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM memos
             WHERE user_id = $1 AND deleted_at IS NULL
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's trashed memos, most recently updated first.
    pub async fn list_trashed(pool: &PgPool, user_id: DbId) -> Result<Vec<Memo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM memos
             WHERE user_id = $1 AND deleted_at IS NOT NULL
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one page of a user's active memos plus the total count.
    ///
    /// `page` is 1-based; out-of-range pages return an empty page with the
    /// correct total.
    pub async fn paginate_active(
        pool: &PgPool,
        user_id: DbId,
        page: i64,
        per_page: i64,
    ) -> Result<MemoPage, sqlx::Error> {
        Self::paginate(pool, user_id, page, per_page, false).await
    }

    /// Fetch one page of a user's trashed memos plus the total count.
    pub async fn paginate_trashed(
        pool: &PgPool,
        user_id: DbId,
        page: i64,
        per_page: i64,
    ) -> Result<MemoPage, sqlx::Error> {
        Self::paginate(pool, user_id, page, per_page, true).await
    }

    async fn paginate(
        pool: &PgPool,
        user_id: DbId,
        page: i64,
        per_page: i64,
        trashed: bool,
    ) -> Result<MemoPage, sqlx::Error> {
        let deleted_clause = if trashed {
            "deleted_at IS NOT NULL"
        } else {
            "deleted_at IS NULL"
        };
        let offset = (page.max(1) - 1) * per_page;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM memos WHERE user_id = $1 AND {deleted_clause}"
        ))
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM memos
             WHERE user_id = $1 AND {deleted_clause}
             ORDER BY updated_at DESC
             LIMIT $2 OFFSET $3"
        );
        let memos = sqlx::query_as::<_, Memo>(&query)
            .bind(user_id)
            .bind(per_page)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok(MemoPage { memos, total })
    }

    /// Update an active memo. Every field is authoritative, including a
    /// NULL deadline. Returns `None` if the memo is missing or trashed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMemo,
    ) -> Result<Option<Memo>, sqlx::Error> {
        let query = format!(
            "UPDATE memos SET
                title = $2,
                content = $3,
                deadline_at = $4,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Memo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.deadline_at)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an active memo. Returns `true` if a row moved to the
    /// trash; `false` if it was missing or already trashed.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE memos SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a trashed memo. Returns `true` if a row came back; `false`
    /// if it was missing or not trashed.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE memos SET deleted_at = NULL, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a trashed memo; association rows cascade.
    ///
    /// Only matches trashed rows: an active memo can never be destroyed
    /// without passing through the trash first.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM memos WHERE id = $1 AND deleted_at IS NOT NULL")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
