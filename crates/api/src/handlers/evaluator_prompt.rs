//! Handlers for the `/evaluator-prompts` junction resource.
//!
//! Pure junction: no payload beyond the key, so there is no update
//! handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::evaluator_prompt::{CreateEvaluatorPrompt, EvaluatorPrompt};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{EvaluatorPromptRepo, EvaluatorRepo, PromptRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /evaluator-prompts`.
#[derive(Debug, Deserialize, Validate)]
pub struct EvaluatorPromptListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub evaluator_id: Option<DbId>,
    pub prompt_id: Option<DbId>,
}

/// GET /api/v1/evaluator-prompts
pub async fn list_evaluator_prompts(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EvaluatorPromptListParams>,
) -> AppResult<Json<Page<EvaluatorPrompt>>> {
    let mut filters = Vec::new();
    if let Some(evaluator_id) = params.evaluator_id {
        filters.push(Filter::eq_id("evaluator_id", evaluator_id));
    }
    if let Some(prompt_id) = params.prompt_id {
        filters.push(Filter::eq_id("prompt_id", prompt_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let associations = EvaluatorPromptRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(associations))
}

/// POST /api/v1/evaluator-prompts
pub async fn create_evaluator_prompt(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEvaluatorPrompt>,
) -> AppResult<(StatusCode, Json<EvaluatorPrompt>)> {
    if !EvaluatorRepo::exists(&state.pool, input.evaluator_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "evaluator",
            input.evaluator_id,
        )));
    }
    if !PromptRepo::exists(&state.pool, input.prompt_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "prompt",
            input.prompt_id,
        )));
    }

    let association = EvaluatorPromptRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("evaluator-prompt association", err))?;
    Ok((StatusCode::CREATED, Json(association)))
}

/// GET /api/v1/evaluator-prompts/{evaluator_id}/{prompt_id}
pub async fn get_evaluator_prompt(
    State(state): State<AppState>,
    ValidPath((evaluator_id, prompt_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<Json<EvaluatorPrompt>> {
    let association = EvaluatorPromptRepo::find_by_key(&state.pool, evaluator_id, prompt_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::pair_not_found(
                "evaluator-prompt association",
                evaluator_id,
                prompt_id,
            ))
        })?;
    Ok(Json(association))
}

/// DELETE /api/v1/evaluator-prompts/{evaluator_id}/{prompt_id}
pub async fn delete_evaluator_prompt(
    State(state): State<AppState>,
    ValidPath((evaluator_id, prompt_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = EvaluatorPromptRepo::delete(&state.pool, evaluator_id, prompt_id)
        .await
        .map_err(|err| map_delete_err("evaluator-prompt association", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::pair_not_found(
            "evaluator-prompt association",
            evaluator_id,
            prompt_id,
        )))
    }
}
