//! Route definitions for the `/providers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::provider;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_providers
/// POST   /        -> create_provider
/// GET    /{id}    -> get_provider
/// PUT    /{id}    -> update_provider
/// DELETE /{id}    -> delete_provider
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(provider::list_providers).post(provider::create_provider),
        )
        .route(
            "/{id}",
            get(provider::get_provider)
                .put(provider::update_provider)
                .delete(provider::delete_provider),
        )
}
