//! Repository for the `scores` table.
//!
//! Duplicate `(metric_id, response_id)` pairs are rejected by
//! `uq_scores_metric_id_response_id`; the caller translates that into a
//! conflict error.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::score::{CreateScore, Score, UpdateScore};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `scores` queries.
const SCORE_COLUMNS: &str = "id, metric_id, response_id, value, created_at, updated_at";

/// Provides CRUD operations for scores.
pub struct ScoreRepo;

impl ScoreRepo {
    pub async fn create(pool: &PgPool, input: &CreateScore) -> Result<Score, sqlx::Error> {
        let query = format!(
            "INSERT INTO scores (metric_id, response_id, value) \
             VALUES ($1, $2, $3) \
             RETURNING {SCORE_COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(input.metric_id)
            .bind(input.response_id)
            .bind(input.value)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Score>, sqlx::Error> {
        let query = format!("SELECT {SCORE_COLUMNS} FROM scores WHERE id = $1");
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List scores, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Score>, sqlx::Error> {
        fetch_page(pool, "scores", SCORE_COLUMNS, "created_at DESC", filters, page).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScore,
    ) -> Result<Option<Score>, sqlx::Error> {
        let query = format!(
            "UPDATE scores SET value = COALESCE($2, value) \
             WHERE id = $1 \
             RETURNING {SCORE_COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .bind(input.value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a score. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
