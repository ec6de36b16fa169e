//! Route definitions for the `/datasets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dataset;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_datasets
/// POST   /        -> create_dataset
/// GET    /{id}    -> get_dataset
/// PUT    /{id}    -> update_dataset
/// DELETE /{id}    -> delete_dataset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dataset::list_datasets).post(dataset::create_dataset))
        .route(
            "/{id}",
            get(dataset::get_dataset)
                .put(dataset::update_dataset)
                .delete(dataset::delete_dataset),
        )
}
