//! Repository for the `evaluator_prompts` junction table.
//!
//! Pure junction with no payload: create, lookup, list, and delete only.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::evaluator_prompt::{CreateEvaluatorPrompt, EvaluatorPrompt};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `evaluator_prompts` queries.
const EVALUATOR_PROMPT_COLUMNS: &str = "evaluator_id, prompt_id, created_at, updated_at";

/// Provides CRUD operations for evaluator–prompt associations.
pub struct EvaluatorPromptRepo;

impl EvaluatorPromptRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvaluatorPrompt,
    ) -> Result<EvaluatorPrompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluator_prompts (evaluator_id, prompt_id) \
             VALUES ($1, $2) \
             RETURNING {EVALUATOR_PROMPT_COLUMNS}"
        );
        sqlx::query_as::<_, EvaluatorPrompt>(&query)
            .bind(input.evaluator_id)
            .bind(input.prompt_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_key(
        pool: &PgPool,
        evaluator_id: DbId,
        prompt_id: DbId,
    ) -> Result<Option<EvaluatorPrompt>, sqlx::Error> {
        let query = format!(
            "SELECT {EVALUATOR_PROMPT_COLUMNS} FROM evaluator_prompts \
             WHERE evaluator_id = $1 AND prompt_id = $2"
        );
        sqlx::query_as::<_, EvaluatorPrompt>(&query)
            .bind(evaluator_id)
            .bind(prompt_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<EvaluatorPrompt>, sqlx::Error> {
        fetch_page(
            pool,
            "evaluator_prompts",
            EVALUATOR_PROMPT_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    /// Delete an association. Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        evaluator_id: DbId,
        prompt_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM evaluator_prompts WHERE evaluator_id = $1 AND prompt_id = $2",
        )
        .bind(evaluator_id)
        .bind(prompt_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
