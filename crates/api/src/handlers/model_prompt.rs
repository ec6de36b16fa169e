//! Handlers for the `/model-prompts` junction resource.
//!
//! Rows are addressed by the `(model_id, prompt_id)` composite key.
//! Creation pre-checks both sides of the association; the only mutable
//! column after that is `sort_order`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::model_prompt::{CreateModelPrompt, ModelPrompt, UpdateModelPrompt};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{ModelPromptRepo, ModelRepo, PromptRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /model-prompts`.
#[derive(Debug, Deserialize, Validate)]
pub struct ModelPromptListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub model_id: Option<DbId>,
    pub prompt_id: Option<DbId>,
}

/// GET /api/v1/model-prompts
pub async fn list_model_prompts(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ModelPromptListParams>,
) -> AppResult<Json<Page<ModelPrompt>>> {
    let mut filters = Vec::new();
    if let Some(model_id) = params.model_id {
        filters.push(Filter::eq_id("model_id", model_id));
    }
    if let Some(prompt_id) = params.prompt_id {
        filters.push(Filter::eq_id("prompt_id", prompt_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let associations = ModelPromptRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(associations))
}

/// POST /api/v1/model-prompts
pub async fn create_model_prompt(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateModelPrompt>,
) -> AppResult<(StatusCode, Json<ModelPrompt>)> {
    if !ModelRepo::exists(&state.pool, input.model_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "model",
            input.model_id,
        )));
    }
    if !PromptRepo::exists(&state.pool, input.prompt_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "prompt",
            input.prompt_id,
        )));
    }

    let association = ModelPromptRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("model-prompt association", err))?;
    Ok((StatusCode::CREATED, Json(association)))
}

/// GET /api/v1/model-prompts/{model_id}/{prompt_id}
pub async fn get_model_prompt(
    State(state): State<AppState>,
    ValidPath((model_id, prompt_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<Json<ModelPrompt>> {
    let association = ModelPromptRepo::find_by_key(&state.pool, model_id, prompt_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::pair_not_found(
                "model-prompt association",
                model_id,
                prompt_id,
            ))
        })?;
    Ok(Json(association))
}

/// PUT /api/v1/model-prompts/{model_id}/{prompt_id}
///
/// Only `sort_order` can change; a duplicate order within the same model
/// comes back as a conflict.
pub async fn update_model_prompt(
    State(state): State<AppState>,
    ValidPath((model_id, prompt_id)): ValidPath<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateModelPrompt>,
) -> AppResult<Json<ModelPrompt>> {
    let association = ModelPromptRepo::update(&state.pool, model_id, prompt_id, &input)
        .await
        .map_err(|err| map_write_err("model-prompt association", err))?
        .ok_or_else(|| {
            AppError::Core(CoreError::pair_not_found(
                "model-prompt association",
                model_id,
                prompt_id,
            ))
        })?;
    Ok(Json(association))
}

/// DELETE /api/v1/model-prompts/{model_id}/{prompt_id}
pub async fn delete_model_prompt(
    State(state): State<AppState>,
    ValidPath((model_id, prompt_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ModelPromptRepo::delete(&state.pool, model_id, prompt_id)
        .await
        .map_err(|err| map_delete_err("model-prompt association", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::pair_not_found(
            "model-prompt association",
            model_id,
            prompt_id,
        )))
    }
}
