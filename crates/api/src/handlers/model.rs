//! Handlers for the `/models` resource.
//!
//! Models own a foreign key to their provider; creation and provider
//! changes pre-check the provider so a bad id comes back as a clear 400
//! instead of a raw constraint failure.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::model::{CreateModel, Model, ModelDetail, UpdateModel};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{ModelRepo, ProviderRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /models`.
#[derive(Debug, Deserialize, Validate)]
pub struct ModelListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    /// Exact match on owning provider.
    pub provider_id: Option<DbId>,
    /// Exact match on version string.
    pub version: Option<String>,
}

/// GET /api/v1/models
pub async fn list_models(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ModelListParams>,
) -> AppResult<Json<Page<Model>>> {
    let mut filters = Vec::new();
    if let Some(search) = params.search {
        filters.push(Filter::contains("name", search));
    }
    if let Some(provider_id) = params.provider_id {
        filters.push(Filter::eq_id("provider_id", provider_id));
    }
    if let Some(version) = params.version {
        filters.push(Filter::eq_text("version", version));
    }

    let page = PageParams::new(params.page, params.limit);
    let models = ModelRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(models))
}

/// POST /api/v1/models
pub async fn create_model(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateModel>,
) -> AppResult<(StatusCode, Json<Model>)> {
    if !ProviderRepo::exists(&state.pool, input.provider_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "provider",
            input.provider_id,
        )));
    }

    let model = ModelRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("model", err))?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// GET /api/v1/models/{id}
///
/// Returns the model with its provider attached.
pub async fn get_model(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ModelDetail>> {
    let detail = ModelRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("model", id)))?;
    Ok(Json(detail))
}

/// PUT /api/v1/models/{id}
pub async fn update_model(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateModel>,
) -> AppResult<Json<Model>> {
    if let Some(provider_id) = input.provider_id {
        if !ProviderRepo::exists(&state.pool, provider_id).await? {
            return Err(AppError::Core(CoreError::reference_not_found(
                "provider",
                provider_id,
            )));
        }
    }

    let model = ModelRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("model", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("model", id)))?;
    Ok(Json(model))
}

/// DELETE /api/v1/models/{id}
pub async fn delete_model(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ModelRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("model", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("model", id)))
    }
}
