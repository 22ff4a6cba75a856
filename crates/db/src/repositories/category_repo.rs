//! Repository for the `categories` table.
//!
//! Categories are fixed reference data: the API only ever reads them.
//! `create` exists for operational seeding and tests.

use sqlx::PgPool;

use memo_core::types::DbId;

use crate::models::category::Category;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color_code, created_at, updated_at";

/// Provides read access to categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Insert a category, or return the existing row if the name is taken.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        color_code: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color_code)
             VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET color_code = EXCLUDED.color_code
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .bind(color_code)
            .fetch_one(pool)
            .await
    }

    /// Return the subset of `ids` that actually exist.
    ///
    /// Callers compare against the input to report unknown category ids
    /// as validation failures.
    pub async fn find_existing_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>("SELECT id FROM categories WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
