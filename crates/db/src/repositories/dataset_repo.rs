//! Repository for the `datasets` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::dataset::{CreateDataset, Dataset, UpdateDataset};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `datasets` queries.
const DATASET_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for datasets.
pub struct DatasetRepo;

impl DatasetRepo {
    pub async fn create(pool: &PgPool, input: &CreateDataset) -> Result<Dataset, sqlx::Error> {
        let query = format!(
            "INSERT INTO datasets (name, description) \
             VALUES ($1, $2) \
             RETURNING {DATASET_COLUMNS}"
        );
        sqlx::query_as::<_, Dataset>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dataset>, sqlx::Error> {
        let query = format!("SELECT {DATASET_COLUMNS} FROM datasets WHERE id = $1");
        sqlx::query_as::<_, Dataset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM datasets WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List datasets with optional filters, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Dataset>, sqlx::Error> {
        fetch_page(pool, "datasets", DATASET_COLUMNS, "name ASC", filters, page).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDataset,
    ) -> Result<Option<Dataset>, sqlx::Error> {
        let query = format!(
            "UPDATE datasets SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description) \
             WHERE id = $1 \
             RETURNING {DATASET_COLUMNS}"
        );
        sqlx::query_as::<_, Dataset>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a dataset. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM datasets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
