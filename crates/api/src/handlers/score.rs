//! Handlers for the `/scores` resource.
//!
//! A score ties one metric to one response; the pair is unique, so a
//! second score for the same combination comes back as a conflict.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::score::{CreateScore, Score, UpdateScore};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{MetricRepo, ResponseRepo, ScoreRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /scores`.
#[derive(Debug, Deserialize, Validate)]
pub struct ScoreListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub metric_id: Option<DbId>,
    pub response_id: Option<DbId>,
}

/// GET /api/v1/scores
pub async fn list_scores(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ScoreListParams>,
) -> AppResult<Json<Page<Score>>> {
    let mut filters = Vec::new();
    if let Some(metric_id) = params.metric_id {
        filters.push(Filter::eq_id("metric_id", metric_id));
    }
    if let Some(response_id) = params.response_id {
        filters.push(Filter::eq_id("response_id", response_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let scores = ScoreRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(scores))
}

/// POST /api/v1/scores
pub async fn create_score(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateScore>,
) -> AppResult<(StatusCode, Json<Score>)> {
    if !MetricRepo::exists(&state.pool, input.metric_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "metric",
            input.metric_id,
        )));
    }
    if !ResponseRepo::exists(&state.pool, input.response_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "response",
            input.response_id,
        )));
    }

    let score = ScoreRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("score", err))?;
    Ok((StatusCode::CREATED, Json(score)))
}

/// GET /api/v1/scores/{id}
pub async fn get_score(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Score>> {
    let score = ScoreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("score", id)))?;
    Ok(Json(score))
}

/// PUT /api/v1/scores/{id}
///
/// Only the value can change; the metric/response pair is fixed.
pub async fn update_score(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateScore>,
) -> AppResult<Json<Score>> {
    let score = ScoreRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("score", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("score", id)))?;
    Ok(Json(score))
}

/// DELETE /api/v1/scores/{id}
pub async fn delete_score(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ScoreRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("score", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("score", id)))
    }
}
