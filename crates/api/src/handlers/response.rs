//! Handlers for the `/responses` resource.
//!
//! A response is one model output for one datapoint. The foreign keys are
//! fixed at creation; updates only touch the generated payload columns.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::response::{CreateResponse, Response, UpdateResponse};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{DatapointRepo, ModelRepo, ResponseRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /responses`.
#[derive(Debug, Deserialize, Validate)]
pub struct ResponseListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub model_id: Option<DbId>,
    pub datapoint_id: Option<DbId>,
}

/// GET /api/v1/responses
pub async fn list_responses(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ResponseListParams>,
) -> AppResult<Json<Page<Response>>> {
    let mut filters = Vec::new();
    if let Some(model_id) = params.model_id {
        filters.push(Filter::eq_id("model_id", model_id));
    }
    if let Some(datapoint_id) = params.datapoint_id {
        filters.push(Filter::eq_id("datapoint_id", datapoint_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let responses = ResponseRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(responses))
}

/// POST /api/v1/responses
pub async fn create_response(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateResponse>,
) -> AppResult<(StatusCode, Json<Response>)> {
    if !ModelRepo::exists(&state.pool, input.model_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "model",
            input.model_id,
        )));
    }
    if !DatapointRepo::exists(&state.pool, input.datapoint_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "datapoint",
            input.datapoint_id,
        )));
    }

    let response = ResponseRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("response", err))?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/responses/{id}
pub async fn get_response(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Response>> {
    let response = ResponseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("response", id)))?;
    Ok(Json(response))
}

/// PUT /api/v1/responses/{id}
pub async fn update_response(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateResponse>,
) -> AppResult<Json<Response>> {
    let response = ResponseRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("response", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("response", id)))?;
    Ok(Json(response))
}

/// DELETE /api/v1/responses/{id}
///
/// Fails with 400 while feedback, evaluations, or scores still reference
/// the response.
pub async fn delete_response(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ResponseRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("response", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("response", id)))
    }
}
