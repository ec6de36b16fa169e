//! Handlers for the `/tags` resource. Tag names are unique.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::tag::{CreateTag, Tag, UpdateTag};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::TagRepo;

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /tags`.
#[derive(Debug, Deserialize, Validate)]
pub struct TagListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
}

/// GET /api/v1/tags
pub async fn list_tags(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<TagListParams>,
) -> AppResult<Json<Page<Tag>>> {
    let mut filters = Vec::new();
    if let Some(search) = params.search {
        filters.push(Filter::contains("name", search));
    }

    let page = PageParams::new(params.page, params.limit);
    let tags = TagRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(tags))
}

/// POST /api/v1/tags
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    let tag = TagRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("tag", err))?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /api/v1/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("tag", id)))?;
    Ok(Json(tag))
}

/// PUT /api/v1/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTag>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("tag", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("tag", id)))?;
    Ok(Json(tag))
}

/// DELETE /api/v1/tags/{id}
///
/// Fails with 400 while any prompt still carries the tag.
pub async fn delete_tag(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TagRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("tag", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("tag", id)))
    }
}
