//! Route definitions for the `/metrics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::metric;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_metrics
/// POST   /        -> create_metric
/// GET    /{id}    -> get_metric
/// PUT    /{id}    -> update_metric
/// DELETE /{id}    -> delete_metric
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(metric::list_metrics).post(metric::create_metric))
        .route(
            "/{id}",
            get(metric::get_metric)
                .put(metric::update_metric)
                .delete(metric::delete_metric),
        )
}
