//! Repository for the `prompt_tags` junction table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::prompt_tag::{CreatePromptTag, PromptTag};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `prompt_tags` queries.
const PROMPT_TAG_COLUMNS: &str = "prompt_id, tag_id, created_at, updated_at";

/// Provides CRUD operations for prompt–tag associations.
pub struct PromptTagRepo;

impl PromptTagRepo {
    pub async fn create(pool: &PgPool, input: &CreatePromptTag) -> Result<PromptTag, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_tags (prompt_id, tag_id) \
             VALUES ($1, $2) \
             RETURNING {PROMPT_TAG_COLUMNS}"
        );
        sqlx::query_as::<_, PromptTag>(&query)
            .bind(input.prompt_id)
            .bind(input.tag_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_key(
        pool: &PgPool,
        prompt_id: DbId,
        tag_id: DbId,
    ) -> Result<Option<PromptTag>, sqlx::Error> {
        let query = format!(
            "SELECT {PROMPT_TAG_COLUMNS} FROM prompt_tags \
             WHERE prompt_id = $1 AND tag_id = $2"
        );
        sqlx::query_as::<_, PromptTag>(&query)
            .bind(prompt_id)
            .bind(tag_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<PromptTag>, sqlx::Error> {
        fetch_page(
            pool,
            "prompt_tags",
            PROMPT_TAG_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    /// Delete an association. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, prompt_id: DbId, tag_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompt_tags WHERE prompt_id = $1 AND tag_id = $2")
            .bind(prompt_id)
            .bind(tag_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
