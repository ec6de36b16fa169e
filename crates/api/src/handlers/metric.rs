//! Handlers for the `/metrics` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::metric::{CreateMetric, Metric, UpdateMetric};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::MetricRepo;

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /metrics`.
#[derive(Debug, Deserialize, Validate)]
pub struct MetricListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
}

/// GET /api/v1/metrics
pub async fn list_metrics(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<MetricListParams>,
) -> AppResult<Json<Page<Metric>>> {
    let mut filters = Vec::new();
    if let Some(search) = params.search {
        filters.push(Filter::contains("name", search));
    }

    let page = PageParams::new(params.page, params.limit);
    let metrics = MetricRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(metrics))
}

/// POST /api/v1/metrics
pub async fn create_metric(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMetric>,
) -> AppResult<(StatusCode, Json<Metric>)> {
    let metric = MetricRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("metric", err))?;
    Ok((StatusCode::CREATED, Json(metric)))
}

/// GET /api/v1/metrics/{id}
pub async fn get_metric(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Metric>> {
    let metric = MetricRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("metric", id)))?;
    Ok(Json(metric))
}

/// PUT /api/v1/metrics/{id}
pub async fn update_metric(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMetric>,
) -> AppResult<Json<Metric>> {
    let metric = MetricRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("metric", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("metric", id)))?;
    Ok(Json(metric))
}

/// DELETE /api/v1/metrics/{id}
///
/// Fails with 400 while any score still references the metric.
pub async fn delete_metric(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MetricRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("metric", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("metric", id)))
    }
}
