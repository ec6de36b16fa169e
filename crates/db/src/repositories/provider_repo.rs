//! Repository for the `providers` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::provider::{CreateProvider, Provider, UpdateProvider};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `providers` queries.
const PROVIDER_COLUMNS: &str = "id, name, link, country, created_at, updated_at";

/// Provides CRUD operations for providers.
pub struct ProviderRepo;

impl ProviderRepo {
    pub async fn create(pool: &PgPool, input: &CreateProvider) -> Result<Provider, sqlx::Error> {
        let query = format!(
            "INSERT INTO providers (name, link, country) \
             VALUES ($1, $2, $3) \
             RETURNING {PROVIDER_COLUMNS}"
        );
        sqlx::query_as::<_, Provider>(&query)
            .bind(&input.name)
            .bind(&input.link)
            .bind(input.country.as_deref())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Provider>, sqlx::Error> {
        let query = format!("SELECT {PROVIDER_COLUMNS} FROM providers WHERE id = $1");
        sqlx::query_as::<_, Provider>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM providers WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List providers with optional filters, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Provider>, sqlx::Error> {
        fetch_page(pool, "providers", PROVIDER_COLUMNS, "name ASC", filters, page).await
    }

    /// Partial update: only provided fields change.
    ///
    /// Returns `None` if no provider with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProvider,
    ) -> Result<Option<Provider>, sqlx::Error> {
        let query = format!(
            "UPDATE providers SET \
                 name = COALESCE($2, name), \
                 link = COALESCE($3, link), \
                 country = COALESCE($4, country) \
             WHERE id = $1 \
             RETURNING {PROVIDER_COLUMNS}"
        );
        sqlx::query_as::<_, Provider>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.link.as_deref())
            .bind(input.country.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a provider. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign-key violation while any model references the
    /// provider; the caller translates that into a still-referenced error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM providers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
