//! Repository for the `datapoints` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::datapoint::{CreateDatapoint, Datapoint, UpdateDatapoint};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `datapoints` queries.
const DATAPOINT_COLUMNS: &str = "id, dataset_id, payload, created_at, updated_at";

/// Provides CRUD operations for datapoints.
pub struct DatapointRepo;

impl DatapointRepo {
    pub async fn create(pool: &PgPool, input: &CreateDatapoint) -> Result<Datapoint, sqlx::Error> {
        let query = format!(
            "INSERT INTO datapoints (dataset_id, payload) \
             VALUES ($1, $2) \
             RETURNING {DATAPOINT_COLUMNS}"
        );
        sqlx::query_as::<_, Datapoint>(&query)
            .bind(input.dataset_id)
            .bind(&input.payload)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Datapoint>, sqlx::Error> {
        let query = format!("SELECT {DATAPOINT_COLUMNS} FROM datapoints WHERE id = $1");
        sqlx::query_as::<_, Datapoint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM datapoints WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List datapoints, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Datapoint>, sqlx::Error> {
        fetch_page(
            pool,
            "datapoints",
            DATAPOINT_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDatapoint,
    ) -> Result<Option<Datapoint>, sqlx::Error> {
        let query = format!(
            "UPDATE datapoints SET \
                 dataset_id = COALESCE($2, dataset_id), \
                 payload = COALESCE($3, payload) \
             WHERE id = $1 \
             RETURNING {DATAPOINT_COLUMNS}"
        );
        sqlx::query_as::<_, Datapoint>(&query)
            .bind(id)
            .bind(input.dataset_id)
            .bind(input.payload.as_ref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a datapoint. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM datapoints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
