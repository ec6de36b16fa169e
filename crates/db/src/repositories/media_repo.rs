//! Repository for the `media` table.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::media::{CreateMedia, Media, UpdateMedia};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `media` queries.
const MEDIA_COLUMNS: &str = "id, datapoint_id, media_type, link, created_at, updated_at";

/// Provides CRUD operations for media records.
pub struct MediaRepo;

impl MediaRepo {
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (datapoint_id, media_type, link) \
             VALUES ($1, $2, $3) \
             RETURNING {MEDIA_COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.datapoint_id)
            .bind(&input.media_type)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {MEDIA_COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<Media>, sqlx::Error> {
        fetch_page(pool, "media", MEDIA_COLUMNS, "created_at DESC", filters, page).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE media SET \
                 media_type = COALESCE($2, media_type), \
                 link = COALESCE($3, link) \
             WHERE id = $1 \
             RETURNING {MEDIA_COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(input.media_type.as_deref())
            .bind(input.link.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a media record. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
