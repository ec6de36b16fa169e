//! Route definitions for the `/responses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::response;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_responses
/// POST   /        -> create_response
/// GET    /{id}    -> get_response
/// PUT    /{id}    -> update_response
/// DELETE /{id}    -> delete_response
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(response::list_responses).post(response::create_response),
        )
        .route(
            "/{id}",
            get(response::get_response)
                .put(response::update_response)
                .delete(response::delete_response),
        )
}
