//! Route definitions for the `/prompts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::prompt;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_prompts
/// POST   /        -> create_prompt
/// GET    /{id}    -> get_prompt
/// PUT    /{id}    -> update_prompt
/// DELETE /{id}    -> delete_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompt::list_prompts).post(prompt::create_prompt))
        .route(
            "/{id}",
            get(prompt::get_prompt)
                .put(prompt::update_prompt)
                .delete(prompt::delete_prompt),
        )
}
