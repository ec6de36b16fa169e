//! Repository for the `prompts` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `prompts` queries.
const PROMPT_COLUMNS: &str = "id, text, token_count, description, created_at, updated_at";

/// Provides CRUD operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    pub async fn create(pool: &PgPool, input: &CreatePrompt) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (text, token_count, description) \
             VALUES ($1, $2, $3) \
             RETURNING {PROMPT_COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.text)
            .bind(input.token_count)
            .bind(input.description.as_deref())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {PROMPT_COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM prompts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List prompts, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Prompt>, sqlx::Error> {
        fetch_page(
            pool,
            "prompts",
            PROMPT_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    /// Partial update: only provided fields change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET \
                 text = COALESCE($2, text), \
                 token_count = COALESCE($3, token_count), \
                 description = COALESCE($4, description) \
             WHERE id = $1 \
             RETURNING {PROMPT_COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(input.text.as_deref())
            .bind(input.token_count)
            .bind(input.description.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
