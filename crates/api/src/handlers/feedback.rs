//! Handlers for the `/feedback` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{FeedbackRepo, ResponseRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /feedback`.
#[derive(Debug, Deserialize, Validate)]
pub struct FeedbackListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub response_id: Option<DbId>,
}

/// GET /api/v1/feedback
pub async fn list_feedback(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<FeedbackListParams>,
) -> AppResult<Json<Page<Feedback>>> {
    let mut filters = Vec::new();
    if let Some(response_id) = params.response_id {
        filters.push(Filter::eq_id("response_id", response_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let feedback = FeedbackRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(feedback))
}

/// POST /api/v1/feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    if !ResponseRepo::exists(&state.pool, input.response_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "response",
            input.response_id,
        )));
    }

    let feedback = FeedbackRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("feedback", err))?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/v1/feedback/{id}
pub async fn get_feedback(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("feedback", id)))?;
    Ok(Json(feedback))
}

/// PUT /api/v1/feedback/{id}
pub async fn update_feedback(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFeedback>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("feedback", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("feedback", id)))?;
    Ok(Json(feedback))
}

/// DELETE /api/v1/feedback/{id}
pub async fn delete_feedback(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FeedbackRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("feedback", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("feedback", id)))
    }
}
