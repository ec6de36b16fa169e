//! Route definitions for the `/evaluations` resource family.
//!
//! Single evaluations grade one response; pairwise evaluations compare two
//! responses and record a winner. Both live under the same prefix.

use axum::routing::get;
use axum::Router;

use crate::handlers::evaluation;
use crate::state::AppState;

/// ```text
/// GET    /single          -> list_single_evaluations
/// POST   /single          -> create_single_evaluation
/// GET    /single/{id}     -> get_single_evaluation
/// PUT    /single/{id}     -> update_single_evaluation
/// DELETE /single/{id}     -> delete_single_evaluation
///
/// GET    /pairwise        -> list_pairwise_evaluations
/// POST   /pairwise        -> create_pairwise_evaluation
/// GET    /pairwise/{id}   -> get_pairwise_evaluation
/// PUT    /pairwise/{id}   -> update_pairwise_evaluation
/// DELETE /pairwise/{id}   -> delete_pairwise_evaluation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/single",
            get(evaluation::list_single_evaluations).post(evaluation::create_single_evaluation),
        )
        .route(
            "/single/{id}",
            get(evaluation::get_single_evaluation)
                .put(evaluation::update_single_evaluation)
                .delete(evaluation::delete_single_evaluation),
        )
        .route(
            "/pairwise",
            get(evaluation::list_pairwise_evaluations)
                .post(evaluation::create_pairwise_evaluation),
        )
        .route(
            "/pairwise/{id}",
            get(evaluation::get_pairwise_evaluation)
                .put(evaluation::update_pairwise_evaluation)
                .delete(evaluation::delete_pairwise_evaluation),
        )
}
