//! Handlers for the `/evaluators` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::evaluator::{CreateEvaluator, Evaluator, UpdateEvaluator};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::EvaluatorRepo;

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /evaluators`.
#[derive(Debug, Deserialize, Validate)]
pub struct EvaluatorListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
}

/// GET /api/v1/evaluators
pub async fn list_evaluators(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EvaluatorListParams>,
) -> AppResult<Json<Page<Evaluator>>> {
    let mut filters = Vec::new();
    if let Some(search) = params.search {
        filters.push(Filter::contains("name", search));
    }

    let page = PageParams::new(params.page, params.limit);
    let evaluators = EvaluatorRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(evaluators))
}

/// POST /api/v1/evaluators
pub async fn create_evaluator(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEvaluator>,
) -> AppResult<(StatusCode, Json<Evaluator>)> {
    let evaluator = EvaluatorRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("evaluator", err))?;
    Ok((StatusCode::CREATED, Json(evaluator)))
}

/// GET /api/v1/evaluators/{id}
pub async fn get_evaluator(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Evaluator>> {
    let evaluator = EvaluatorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("evaluator", id)))?;
    Ok(Json(evaluator))
}

/// PUT /api/v1/evaluators/{id}
pub async fn update_evaluator(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateEvaluator>,
) -> AppResult<Json<Evaluator>> {
    let evaluator = EvaluatorRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("evaluator", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("evaluator", id)))?;
    Ok(Json(evaluator))
}

/// DELETE /api/v1/evaluators/{id}
pub async fn delete_evaluator(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EvaluatorRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("evaluator", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("evaluator", id)))
    }
}
