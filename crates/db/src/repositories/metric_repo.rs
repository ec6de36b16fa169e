//! Repository for the `metrics` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::metric::{CreateMetric, Metric, UpdateMetric};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `metrics` queries.
const METRIC_COLUMNS: &str = "\
    id, name, description, min_value, max_value, step, created_at, updated_at";

/// Provides CRUD operations for metrics.
pub struct MetricRepo;

impl MetricRepo {
    pub async fn create(pool: &PgPool, input: &CreateMetric) -> Result<Metric, sqlx::Error> {
        let query = format!(
            "INSERT INTO metrics (name, description, min_value, max_value, step) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {METRIC_COLUMNS}"
        );
        sqlx::query_as::<_, Metric>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.min_value)
            .bind(input.max_value)
            .bind(input.step)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Metric>, sqlx::Error> {
        let query = format!("SELECT {METRIC_COLUMNS} FROM metrics WHERE id = $1");
        sqlx::query_as::<_, Metric>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM metrics WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List metrics with optional filters, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Metric>, sqlx::Error> {
        fetch_page(pool, "metrics", METRIC_COLUMNS, "name ASC", filters, page).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMetric,
    ) -> Result<Option<Metric>, sqlx::Error> {
        let query = format!(
            "UPDATE metrics SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 min_value = COALESCE($4, min_value), \
                 max_value = COALESCE($5, max_value), \
                 step = COALESCE($6, step) \
             WHERE id = $1 \
             RETURNING {METRIC_COLUMNS}"
        );
        sqlx::query_as::<_, Metric>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.min_value)
            .bind(input.max_value)
            .bind(input.step)
            .fetch_optional(pool)
            .await
    }

    /// Delete a metric. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM metrics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
