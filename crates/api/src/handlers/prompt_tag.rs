//! Handlers for the `/prompt-tags` junction resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use lmeval_core::error::CoreError;
use lmeval_core::types::DbId;
use lmeval_db::filter::Filter;
use lmeval_db::models::prompt_tag::{CreatePromptTag, PromptTag};
use lmeval_db::pagination::{Page, PageParams};
use lmeval_db::repositories::{PromptRepo, PromptTagRepo, TagRepo};

use crate::error::{map_delete_err, map_write_err, AppError, AppResult};
use crate::extract::{ValidPath, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Query parameters for `GET /prompt-tags`.
#[derive(Debug, Deserialize, Validate)]
pub struct PromptTagListParams {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: Option<i64>,
    pub prompt_id: Option<DbId>,
    pub tag_id: Option<DbId>,
}

/// GET /api/v1/prompt-tags
pub async fn list_prompt_tags(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PromptTagListParams>,
) -> AppResult<Json<Page<PromptTag>>> {
    let mut filters = Vec::new();
    if let Some(prompt_id) = params.prompt_id {
        filters.push(Filter::eq_id("prompt_id", prompt_id));
    }
    if let Some(tag_id) = params.tag_id {
        filters.push(Filter::eq_id("tag_id", tag_id));
    }

    let page = PageParams::new(params.page, params.limit);
    let associations = PromptTagRepo::list(&state.pool, &filters, &page).await?;
    Ok(Json(associations))
}

/// POST /api/v1/prompt-tags
pub async fn create_prompt_tag(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePromptTag>,
) -> AppResult<(StatusCode, Json<PromptTag>)> {
    if !PromptRepo::exists(&state.pool, input.prompt_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "prompt",
            input.prompt_id,
        )));
    }
    if !TagRepo::exists(&state.pool, input.tag_id).await? {
        return Err(AppError::Core(CoreError::reference_not_found(
            "tag",
            input.tag_id,
        )));
    }

    let association = PromptTagRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_write_err("prompt-tag association", err))?;
    Ok((StatusCode::CREATED, Json(association)))
}

/// GET /api/v1/prompt-tags/{prompt_id}/{tag_id}
pub async fn get_prompt_tag(
    State(state): State<AppState>,
    ValidPath((prompt_id, tag_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<Json<PromptTag>> {
    let association = PromptTagRepo::find_by_key(&state.pool, prompt_id, tag_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::pair_not_found(
                "prompt-tag association",
                prompt_id,
                tag_id,
            ))
        })?;
    Ok(Json(association))
}

/// DELETE /api/v1/prompt-tags/{prompt_id}/{tag_id}
pub async fn delete_prompt_tag(
    State(state): State<AppState>,
    ValidPath((prompt_id, tag_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = PromptTagRepo::delete(&state.pool, prompt_id, tag_id)
        .await
        .map_err(|err| map_delete_err("prompt-tag association", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::pair_not_found(
            "prompt-tag association",
            prompt_id,
            tag_id,
        )))
    }
}
