//! Repository for the `models` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::model::{CreateModel, Model, ModelDetail, UpdateModel};
use crate::pagination::{fetch_page, Page, PageParams};
use crate::repositories::ProviderRepo;

/// Column list for `models` queries.
const MODEL_COLUMNS: &str = "\
    id, name, link, description, version, param_count, context_window, \
    temperature, top_p, provider_id, created_at, updated_at";

/// Provides CRUD operations for models.
pub struct ModelRepo;

impl ModelRepo {
    pub async fn create(pool: &PgPool, input: &CreateModel) -> Result<Model, sqlx::Error> {
        let query = format!(
            "INSERT INTO models \
                 (name, link, description, version, param_count, context_window, \
                  temperature, top_p, provider_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {MODEL_COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(&input.name)
            .bind(&input.link)
            .bind(&input.description)
            .bind(&input.version)
            .bind(input.param_count)
            .bind(input.context_window)
            .bind(input.temperature)
            .bind(input.top_p)
            .bind(input.provider_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a model with its owning provider attached.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ModelDetail>, sqlx::Error> {
        let Some(model) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        // The FK guarantees the provider row exists.
        let provider = ProviderRepo::find_by_id(pool, model.provider_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(Some(ModelDetail { model, provider }))
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM models WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List models with optional filters, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Model>, sqlx::Error> {
        fetch_page(pool, "models", MODEL_COLUMNS, "name ASC", filters, page).await
    }

    /// Partial update: only provided fields change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateModel,
    ) -> Result<Option<Model>, sqlx::Error> {
        let query = format!(
            "UPDATE models SET \
                 name = COALESCE($2, name), \
                 link = COALESCE($3, link), \
                 description = COALESCE($4, description), \
                 version = COALESCE($5, version), \
                 param_count = COALESCE($6, param_count), \
                 context_window = COALESCE($7, context_window), \
                 temperature = COALESCE($8, temperature), \
                 top_p = COALESCE($9, top_p), \
                 provider_id = COALESCE($10, provider_id) \
             WHERE id = $1 \
             RETURNING {MODEL_COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.link.as_deref())
            .bind(input.description.as_deref())
            .bind(input.version.as_deref())
            .bind(input.param_count)
            .bind(input.context_window)
            .bind(input.temperature)
            .bind(input.top_p)
            .bind(input.provider_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a model. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
