//! Route definitions for the `/evaluators` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::evaluator;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_evaluators
/// POST   /        -> create_evaluator
/// GET    /{id}    -> get_evaluator
/// PUT    /{id}    -> update_evaluator
/// DELETE /{id}    -> delete_evaluator
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(evaluator::list_evaluators).post(evaluator::create_evaluator),
        )
        .route(
            "/{id}",
            get(evaluator::get_evaluator)
                .put(evaluator::update_evaluator)
                .delete(evaluator::delete_evaluator),
        )
}
