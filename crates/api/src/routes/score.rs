//! Route definitions for the `/scores` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::score;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_scores
/// POST   /        -> create_score
/// GET    /{id}    -> get_score
/// PUT    /{id}    -> update_score (value only)
/// DELETE /{id}    -> delete_score
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(score::list_scores).post(score::create_score))
        .route(
            "/{id}",
            get(score::get_score)
                .put(score::update_score)
                .delete(score::delete_score),
        )
}
