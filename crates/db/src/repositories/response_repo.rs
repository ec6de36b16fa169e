//! Repository for the `responses` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::response::{CreateResponse, Response, UpdateResponse};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `responses` queries.
const RESPONSE_COLUMNS: &str = "\
    id, model_id, datapoint_id, generated_text, latency_ms, token_count, \
    created_at, updated_at";

/// Provides CRUD operations for responses.
pub struct ResponseRepo;

impl ResponseRepo {
    pub async fn create(pool: &PgPool, input: &CreateResponse) -> Result<Response, sqlx::Error> {
        let query = format!(
            "INSERT INTO responses \
                 (model_id, datapoint_id, generated_text, latency_ms, token_count) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {RESPONSE_COLUMNS}"
        );
        sqlx::query_as::<_, Response>(&query)
            .bind(input.model_id)
            .bind(input.datapoint_id)
            .bind(&input.generated_text)
            .bind(input.latency_ms)
            .bind(input.token_count)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Response>, sqlx::Error> {
        let query = format!("SELECT {RESPONSE_COLUMNS} FROM responses WHERE id = $1");
        sqlx::query_as::<_, Response>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM responses WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List responses, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Response>, sqlx::Error> {
        fetch_page(
            pool,
            "responses",
            RESPONSE_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResponse,
    ) -> Result<Option<Response>, sqlx::Error> {
        let query = format!(
            "UPDATE responses SET \
                 generated_text = COALESCE($2, generated_text), \
                 latency_ms = COALESCE($3, latency_ms), \
                 token_count = COALESCE($4, token_count) \
             WHERE id = $1 \
             RETURNING {RESPONSE_COLUMNS}"
        );
        sqlx::query_as::<_, Response>(&query)
            .bind(id)
            .bind(input.generated_text.as_deref())
            .bind(input.latency_ms)
            .bind(input.token_count)
            .fetch_optional(pool)
            .await
    }

    /// Delete a response. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM responses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
