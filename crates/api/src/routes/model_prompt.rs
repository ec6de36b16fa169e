//! Route definitions for the `/model-prompts` junction resource.
//!
//! Rows are addressed by their composite key (model + prompt).

use axum::routing::get;
use axum::Router;

use crate::handlers::model_prompt;
use crate::state::AppState;

/// ```text
/// GET    /                        -> list_model_prompts
/// POST   /                        -> create_model_prompt
/// GET    /{model_id}/{prompt_id}  -> get_model_prompt
/// PUT    /{model_id}/{prompt_id}  -> update_model_prompt (sort order only)
/// DELETE /{model_id}/{prompt_id}  -> delete_model_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(model_prompt::list_model_prompts).post(model_prompt::create_model_prompt),
        )
        .route(
            "/{model_id}/{prompt_id}",
            get(model_prompt::get_model_prompt)
                .put(model_prompt::update_model_prompt)
                .delete(model_prompt::delete_model_prompt),
        )
}
