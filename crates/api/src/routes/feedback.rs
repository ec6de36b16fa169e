//! Route definitions for the `/feedback` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_feedback
/// POST   /        -> create_feedback
/// GET    /{id}    -> get_feedback
/// PUT    /{id}    -> update_feedback
/// DELETE /{id}    -> delete_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(feedback::list_feedback).post(feedback::create_feedback),
        )
        .route(
            "/{id}",
            get(feedback::get_feedback)
                .put(feedback::update_feedback)
                .delete(feedback::delete_feedback),
        )
}
