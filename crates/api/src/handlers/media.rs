//! Handlers for the `/media` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::media::{CreateMedia, Media, UpdateMedia};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{DatapointRepo, MediaRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /media`.
#[derive(Debug, Deserialize, Validate)]
pub struct MediaListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub datapoint_id: Option<DbId>,
    /// Exact match on media type (e.g. "image", "audio").
    pub media_type: Option<String>,
}

/// GET /api/v1/media
pub async fn list_media(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<MediaListParams>,
) -> AppResult<Json<Page<Media>>> {
    let mut filters = Vec::new();
    if let Some(datapoint_id) = params.datapoint_id {
        filters.push(Filter::eq_id("datapoint_id", datapoint_id));
    }
    if let Some(media_type) = params.media_type {
        filters.push(Filter::eq_text("media_type", media_type));
    }

    let page = PageParams::new(params.page, params.limit);
    let media = MediaRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(media))
}

/// POST /api/v1/media
pub async fn create_media(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMedia>,
) -> AppResult<(StatusCode, Json<Media>)> {
    if !DatapointRepo::exists(&state.pool, input.datapoint_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "datapoint",
            input.datapoint_id,
        )));
    }

    let media = MediaRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("media", err))?;
    Ok((StatusCode::CREATED, Json(media)))
}

/// GET /api/v1/media/{id}
pub async fn get_media(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Media>> {
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("media", id)))?;
    Ok(Json(media))
}

/// PUT /api/v1/media/{id}
pub async fn update_media(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMedia>,
) -> AppResult<Json<Media>> {
    let media = MediaRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("media", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("media", id)))?;
    Ok(Json(media))
}

/// DELETE /api/v1/media/{id}
pub async fn delete_media(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MediaRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("media", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("media", id)))
    }
}
