//! Repository for the `model_prompts` junction table.
//!
//! Rows are addressed by the `(model_id, prompt_id)` composite key.
//! `sort_order` is the only mutable column and is unique per model
//! (`uq_model_prompts_model_id_sort_order`).

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::model_prompt::{CreateModelPrompt, ModelPrompt, UpdateModelPrompt};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `model_prompts` queries.
const MODEL_PROMPT_COLUMNS: &str = "model_id, prompt_id, sort_order, created_at, updated_at";

/// Provides CRUD operations for model–prompt associations.
pub struct ModelPromptRepo;

impl ModelPromptRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateModelPrompt,
    ) -> Result<ModelPrompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO model_prompts (model_id, prompt_id, sort_order) \
             VALUES ($1, $2, $3) \
             RETURNING {MODEL_PROMPT_COLUMNS}"
        );
        sqlx::query_as::<_, ModelPrompt>(&query)
            .bind(input.model_id)
            .bind(input.prompt_id)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_key(
        pool: &PgPool,
        model_id: DbId,
        prompt_id: DbId,
    ) -> Result<Option<ModelPrompt>, sqlx::Error> {
        let query = format!(
            "SELECT {MODEL_PROMPT_COLUMNS} FROM model_prompts \
             WHERE model_id = $1 AND prompt_id = $2"
        );
        sqlx::query_as::<_, ModelPrompt>(&query)
            .bind(model_id)
            .bind(prompt_id)
            .fetch_optional(pool)
            .await
    }

    /// List associations ordered by model, then prompt order within it.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<ModelPrompt>, sqlx::Error> {
        fetch_page(
            pool,
            "model_prompts",
            MODEL_PROMPT_COLUMNS,
            "model_id, sort_order ASC NULLS LAST, prompt_id",
            filters,
            page,
        )
        .await
    }

    /// Update the association's `sort_order`. The key itself is immutable.
    pub async fn update(
        pool: &PgPool,
        model_id: DbId,
        prompt_id: DbId,
        input: &UpdateModelPrompt,
    ) -> Result<Option<ModelPrompt>, sqlx::Error> {
        let query = format!(
            "UPDATE model_prompts SET sort_order = COALESCE($3, sort_order) \
             WHERE model_id = $1 AND prompt_id = $2 \
             RETURNING {MODEL_PROMPT_COLUMNS}"
        );
        sqlx::query_as::<_, ModelPrompt>(&query)
            .bind(model_id)
            .bind(prompt_id)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an association. Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        model_id: DbId,
        prompt_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM model_prompts WHERE model_id = $1 AND prompt_id = $2")
                .bind(model_id)
                .bind(prompt_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
