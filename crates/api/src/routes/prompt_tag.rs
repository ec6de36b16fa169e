//! Route definitions for the `/prompt-tags` junction resource.
//!
//! Like evaluator-prompts, the junction carries no mutable payload; rows
//! are created and deleted only.

use axum::routing::get;
use axum::Router;

use crate::handlers::prompt_tag;
use crate::state::AppState;

/// ```text
/// GET    /                       -> list_prompt_tags
/// POST   /                       -> create_prompt_tag
/// GET    /{prompt_id}/{tag_id}   -> get_prompt_tag
/// DELETE /{prompt_id}/{tag_id}   -> delete_prompt_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(prompt_tag::list_prompt_tags).post(prompt_tag::create_prompt_tag),
        )
        .route(
            "/{prompt_id}/{tag_id}",
            get(prompt_tag::get_prompt_tag).delete(prompt_tag::delete_prompt_tag),
        )
}
