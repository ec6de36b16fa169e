//! Route definitions for the `/tags` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tag;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_tags
/// POST   /        -> create_tag
/// GET    /{id}    -> get_tag
/// PUT    /{id}    -> update_tag
/// DELETE /{id}    -> delete_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tag::list_tags).post(tag::create_tag))
        .route(
            "/{id}",
            get(tag::get_tag).put(tag::update_tag).delete(tag::delete_tag),
        )
}
