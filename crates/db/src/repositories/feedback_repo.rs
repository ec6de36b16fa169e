//! Repository for the `feedback` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `feedback` queries.
const FEEDBACK_COLUMNS: &str = "id, response_id, content, rating, created_at, updated_at";

/// Provides CRUD operations for feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (response_id, content, rating) \
             VALUES ($1, $2, $3) \
             RETURNING {FEEDBACK_COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.response_id)
            .bind(&input.content)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List feedback, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Feedback>, sqlx::Error> {
        fetch_page(
            pool,
            "feedback",
            FEEDBACK_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedback,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback SET \
                 content = COALESCE($2, content), \
                 rating = COALESCE($3, rating) \
             WHERE id = $1 \
             RETURNING {FEEDBACK_COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(input.content.as_deref())
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete feedback. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
