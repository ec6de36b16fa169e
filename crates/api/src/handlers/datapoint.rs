//! Handlers for the `/datapoints` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::datapoint::{CreateDatapoint, Datapoint, UpdateDatapoint};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{DatapointRepo, DatasetRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /datapoints`.
#[derive(Debug, Deserialize, Validate)]
pub struct DatapointListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub dataset_id: Option<DbId>,
}

/// GET /api/v1/datapoints
pub async fn list_datapoints(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<DatapointListParams>,
) -> AppResult<Json<Page<Datapoint>>> {
    let mut filters = Vec::new();
    if let Some(dataset_id) = params.dataset_id {
        filters.push(Filter::eq_id("dataset_id", dataset_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let datapoints = DatapointRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(datapoints))
}

/// POST /api/v1/datapoints
pub async fn create_datapoint(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDatapoint>,
) -> AppResult<(StatusCode, Json<Datapoint>)> {
    if !DatasetRepo::exists(&state.pool, input.dataset_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "dataset",
            input.dataset_id,
        )));
    }

    let datapoint = DatapointRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("datapoint", err))?;
    Ok((StatusCode::CREATED, Json(datapoint)))
}

/// GET /api/v1/datapoints/{id}
pub async fn get_datapoint(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Datapoint>> {
    let datapoint = DatapointRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("datapoint", id)))?;
    Ok(Json(datapoint))
}

/// PUT /api/v1/datapoints/{id}
pub async fn update_datapoint(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDatapoint>,
) -> AppResult<Json<Datapoint>> {
    if let Some(dataset_id) = input.dataset_id {
        if !DatasetRepo::exists(&state.pool, dataset_id).await? {
            return Err(AppError::Core(CoreError::reference_not_found(
                "dataset",
                dataset_id,
            )));
        }
    }

    let datapoint = DatapointRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("datapoint", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("datapoint", id)))?;
    Ok(Json(datapoint))
}

/// DELETE /api/v1/datapoints/{id}
pub async fn delete_datapoint(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DatapointRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("datapoint", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("datapoint", id)))
    }
}
