//! Handlers for the `/providers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::provider::{CreateProvider, Provider, UpdateProvider};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::ProviderRepo;

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /providers`.
#[derive(Debug, Deserialize, Validate)]
pub struct ProviderListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    /// Exact match on country.
    pub country: Option<String>,
}

/// GET /api/v1/providers
pub async fn list_providers(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ProviderListParams>,
) -> AppResult<Json<Page<Provider>>> {
    let mut filters = Vec::new();
    if let Some(search) = params.search {
        filters.push(Filter::contains("name", search));
    }
    if let Some(country) = params.country {
        filters.push(Filter::eq_text("country", country));
    }

    let page = PageParams::new(params.page, params.limit);
    let providers = ProviderRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(providers))
}

/// POST /api/v1/providers
pub async fn create_provider(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProvider>,
) -> AppResult<(StatusCode, Json<Provider>)> {
    let provider = ProviderRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("provider", err))?;
    Ok((StatusCode::CREATED, Json(provider)))
}

/// GET /api/v1/providers/{id}
pub async fn get_provider(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Provider>> {
    let provider = ProviderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("provider", id)))?;
    Ok(Json(provider))
}

/// PUT /api/v1/providers/{id}
pub async fn update_provider(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProvider>,
) -> AppResult<Json<Provider>> {
    let provider = ProviderRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("provider", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("provider", id)))?;
    Ok(Json(provider))
}

/// DELETE /api/v1/providers/{id}
///
/// Fails with 400 while any model still references the provider.
pub async fn delete_provider(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProviderRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("provider", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("provider", id)))
    }
}
