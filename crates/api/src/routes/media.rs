//! Route definitions for the `/media` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_media
/// POST   /        -> create_media
/// GET    /{id}    -> get_media
/// PUT    /{id}    -> update_media
/// DELETE /{id}    -> delete_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list_media).post(media::create_media))
        .route(
            "/{id}",
            get(media::get_media)
                .put(media::update_media)
                .delete(media::delete_media),
        )
}
