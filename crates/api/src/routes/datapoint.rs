//! Route definitions for the `/datapoints` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::datapoint;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_datapoints
/// POST   /        -> create_datapoint
/// GET    /{id}    -> get_datapoint
/// PUT    /{id}    -> update_datapoint
/// DELETE /{id}    -> delete_datapoint
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(datapoint::list_datapoints).post(datapoint::create_datapoint),
        )
        .route(
            "/{id}",
            get(datapoint::get_datapoint)
                .put(datapoint::update_datapoint)
                .delete(datapoint::delete_datapoint),
        )
}
