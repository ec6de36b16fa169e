//! Handlers for the `/prompts` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::PromptRepo;

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /prompts`.
#[derive(Debug, Deserialize, Validate)]
pub struct PromptListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the prompt text.
    pub search: Option<String>,
}

/// GET /api/v1/prompts
pub async fn list_prompts(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PromptListParams>,
) -> AppResult<Json<Page<Prompt>>> {
    let mut filters = Vec::new();
    if let Some(search) = params.search {
        filters.push(Filter::contains("text", search));
    }

    let page = PageParams::new(params.page, params.limit);
    let prompts = PromptRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(prompts))
}

/// POST /api/v1/prompts
pub async fn create_prompt(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePrompt>,
) -> AppResult<(StatusCode, Json<Prompt>)> {
    let prompt = PromptRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("prompt", err))?;
    Ok((StatusCode::CREATED, Json(prompt)))
}

/// GET /api/v1/prompts/{id}
pub async fn get_prompt(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Prompt>> {
    let prompt = PromptRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("prompt", id)))?;
    Ok(Json(prompt))
}

/// PUT /api/v1/prompts/{id}
pub async fn update_prompt(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePrompt>,
) -> AppResult<Json<Prompt>> {
    let prompt = PromptRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_write_err("prompt", err))?
        .ok_or_else(|| AppError::Core(CoreError::not_found("prompt", id)))?;
    Ok(Json(prompt))
}

/// DELETE /api/v1/prompts/{id}
pub async fn delete_prompt(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PromptRepo::delete(&state.pool, id)
        .await
        .map_err(|err| map_delete_err("prompt", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("prompt", id)))
    }
}
