//! Handlers for the `/datasets` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::dataset::{CreateDataset, Dataset, UpdateDataset};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::DatasetRepo;

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /datasets`.
#[derive(Debug, Deserialize, Validate)]
pub struct DatasetListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
}

/// GET /api/v1/datasets
pub async fn list_datasets(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<DatasetListParams>,
) -> AppResult<Json<Page<Dataset>>> {
    let mut filters = Vec::new();
    if let Some(search) = params.search {
        filters.push(Filter::contains("name", search));
    }

    let page = PageParams::new(params.page, params.limit);
    let datasets = DatasetRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(datasets))
}

/// POST /api/v1/datasets
pub async fn create_dataset(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDataset>,
) -> AppResult<(StatusCode, Json<Dataset>)> {
    let dataset = DatasetRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("dataset", err))?;
    Ok((StatusCode::CREATED, Json(dataset)))
}

/// GET /api/v1/datasets/{id}
pub async fn get_dataset(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Dataset>> {
    let dataset = DatasetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("dataset", id)))?;
    Ok(Json(dataset))
}

/// PUT /api/v1/datasets/{id}
pub async fn update_dataset(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDataset>,
) -> AppResult<Json<Dataset>> {
    let dataset = DatasetRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("dataset", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("dataset", id)))?;
    Ok(Json(dataset))
}

/// DELETE /api/v1/datasets/{id}
///
/// Fails with 400 while any datapoint still belongs to the dataset.
pub async fn delete_dataset(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DatasetRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("dataset", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("dataset", id)))
    }
}
