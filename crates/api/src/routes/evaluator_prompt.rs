//! Route definitions for the `/evaluator-prompts` junction resource.
//!
//! The junction carries no mutable payload, so there is no update route;
//! rows are created and deleted only.

use axum::routing::get;
use axum::Router;

use crate::handlers::evaluator_prompt;
use crate::state::AppState;

/// ```text
/// GET    /                            -> list_evaluator_prompts
/// POST   /                            -> create_evaluator_prompt
/// GET    /{evaluator_id}/{prompt_id}  -> get_evaluator_prompt
/// DELETE /{evaluator_id}/{prompt_id}  -> delete_evaluator_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(evaluator_prompt::list_evaluator_prompts)
                .post(evaluator_prompt::create_evaluator_prompt),
        )
        .route(
            "/{evaluator_id}/{prompt_id}",
            get(evaluator_prompt::get_evaluator_prompt)
                .delete(evaluator_prompt::delete_evaluator_prompt),
        )
}
