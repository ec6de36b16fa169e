//! Repository for the `evaluators` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::evaluator::{CreateEvaluator, Evaluator, UpdateEvaluator};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `evaluators` queries.
const EVALUATOR_COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for evaluators.
pub struct EvaluatorRepo;

impl EvaluatorRepo {
    pub async fn create(pool: &PgPool, input: &CreateEvaluator) -> Result<Evaluator, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluators (name) VALUES ($1) RETURNING {EVALUATOR_COLUMNS}"
        );
        sqlx::query_as::<_, Evaluator>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Evaluator>, sqlx::Error> {
        let query = format!("SELECT {EVALUATOR_COLUMNS} FROM evaluators WHERE id = $1");
        sqlx::query_as::<_, Evaluator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM evaluators WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List evaluators with optional filters, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Evaluator>, sqlx::Error> {
        fetch_page(pool, "evaluators", EVALUATOR_COLUMNS, "name ASC", filters, page).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvaluator,
    ) -> Result<Option<Evaluator>, sqlx::Error> {
        let query = format!(
            "UPDATE evaluators SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {EVALUATOR_COLUMNS}"
        );
        sqlx::query_as::<_, Evaluator>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete an evaluator. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM evaluators WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
