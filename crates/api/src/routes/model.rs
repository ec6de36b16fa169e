//! Route definitions for the `/models` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::model;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_models
/// POST   /        -> create_model
/// GET    /{id}    -> get_model (includes provider)
/// PUT    /{id}    -> update_model
/// DELETE /{id}    -> delete_model
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(model::list_models).post(model::create_model))
        .route(
            "/{id}",
            get(model::get_model)
                .put(model::update_model)
                .delete(model::delete_model),
        )
}
