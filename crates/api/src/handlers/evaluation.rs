//! Handlers for the `/evaluations` resource family.
//!
//! Single evaluations grade one response against one evaluator; pairwise
//! evaluations compare two distinct responses and optionally record a
//! winner, which must be one of the pair.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::evaluation::{
    CreatePairwiseEvaluation, CreateSingleEvaluation, PairwiseEvaluation, SingleEvaluation,
    UpdatePairwiseEvaluation, UpdateSingleEvaluation,
};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{
    EvaluatorRepo, PairwiseEvaluationRepo, ResponseRepo, SingleEvaluationRepo,
};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Single evaluations
// ---------------------------------------------------------------------------

/// Query parameters for `GET /evaluations/single`.
#[derive(Debug, Deserialize, Validate)]
pub struct SingleEvaluationListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub evaluator_id: Option<DbId>,
    pub response_id: Option<DbId>,
}

/// GET /api/v1/evaluations/single
pub async fn list_single_evaluations(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SingleEvaluationListParams>,
) -> AppResult<Json<Page<SingleEvaluation>>> {
    let mut filters = Vec::new();
    if let Some(evaluator_id) = params.evaluator_id {
        filters.push(Filter::eq_id("evaluator_id", evaluator_id));
    }
    if let Some(response_id) = params.response_id {
        filters.push(Filter::eq_id("response_id", response_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let evaluations = SingleEvaluationRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(evaluations))
}

/// POST /api/v1/evaluations/single
pub async fn create_single_evaluation(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSingleEvaluation>,
) -> AppResult<(StatusCode, Json<SingleEvaluation>)> {
    if !EvaluatorRepo::exists(&state.pool, input.evaluator_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "evaluator",
            input.evaluator_id,
        )));
    }
    if !ResponseRepo::exists(&state.pool, input.response_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "response",
            input.response_id,
        )));
    }

    let evaluation = SingleEvaluationRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("evaluation", err))?;
    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// GET /api/v1/evaluations/single/{id}
pub async fn get_single_evaluation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<SingleEvaluation>> {
    let evaluation = SingleEvaluationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("evaluation", id)))?;
    Ok(Json(evaluation))
}

/// PUT /api/v1/evaluations/single/{id}
pub async fn update_single_evaluation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSingleEvaluation>,
) -> AppResult<Json<SingleEvaluation>> {
    let evaluation = SingleEvaluationRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("evaluation", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("evaluation", id)))?;
    Ok(Json(evaluation))
}

/// DELETE /api/v1/evaluations/single/{id}
pub async fn delete_single_evaluation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SingleEvaluationRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("evaluation", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("evaluation", id)))
    }
}

// ---------------------------------------------------------------------------
// Pairwise evaluations
// ---------------------------------------------------------------------------

/// Query parameters for `GET /evaluations/pairwise`.
#[derive(Debug, Deserialize, Validate)]
pub struct PairwiseEvaluationListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub evaluator_id: Option<DbId>,
}

/// GET /api/v1/evaluations/pairwise
pub async fn list_pairwise_evaluations(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PairwiseEvaluationListParams>,
) -> AppResult<Json<Page<PairwiseEvaluation>>> {
    let mut filters = Vec::new();
    if let Some(evaluator_id) = params.evaluator_id {
        filters.push(Filter::eq_id("evaluator_id", evaluator_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let evaluations = PairwiseEvaluationRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(evaluations))
}

/// POST /api/v1/evaluations/pairwise
///
/// The two compared responses must differ (enforced by DTO validation)
/// and the winner, when given, must be one of the pair.
pub async fn create_pairwise_evaluation(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePairwiseEvaluation>,
) -> AppResult<(StatusCode, Json<PairwiseEvaluation>)> {
    if !EvaluatorRepo::exists(&state.pool, input.evaluator_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "evaluator",
            input.evaluator_id,
        )));
    }
    for response_id in [input.response_a_id, input.response_b_id] {
        if !ResponseRepo::exists(&state.pool, response_id).await? {
            return Err(AppError::Core(CoreError::reference_not_found(
                "response",
                response_id,
            )));
        }
    }
    if let Some(winner) = input.winner_response_id {
        if winner != input.response_a_id && winner != input.response_b_id {
            return Err(AppError::BadRequest(
                "winner_response_id must be one of the compared responses".to_string(),
            ));
        }
    }

    let evaluation = PairwiseEvaluationRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("evaluation", err))?;
    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// GET /api/v1/evaluations/pairwise/{id}
pub async fn get_pairwise_evaluation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<PairwiseEvaluation>> {
    let evaluation = PairwiseEvaluationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("evaluation", id)))?;
    Ok(Json(evaluation))
}

/// PUT /api/v1/evaluations/pairwise/{id}
///
/// The compared pair is fixed; only the winner and notes can change. A
/// new winner must still be one of the original pair.
pub async fn update_pairwise_evaluation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePairwiseEvaluation>,
) -> AppResult<Json<PairwiseEvaluation>> {
    if let Some(winner) = input.winner_response_id {
        let existing = PairwiseEvaluationRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("evaluation", id)))?;
        if winner != existing.response_a_id && winner != existing.response_b_id {
            return Err(AppError::BadRequest(
                "winner_response_id must be one of the compared responses".to_string(),
            ));
        }
    }

    let evaluation = PairwiseEvaluationRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("evaluation", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("evaluation", id)))?;
    Ok(Json(evaluation))
}

/// DELETE /api/v1/evaluations/pairwise/{id}
pub async fn delete_pairwise_evaluation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PairwiseEvaluationRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("evaluation", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("evaluation", id)))
    }
}
