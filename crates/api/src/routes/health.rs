//! Liveness endpoint. Mounted at the root, outside `/api/v1`, so load
//! balancers can probe it without the versioned prefix.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// Probes the database with a trivial query. The endpoint itself always
/// answers 200; a failed probe is reported as `"degraded"` in the body.
async fn health_check(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = lmeval_db::health_check(&state.pool).await.is_ok();

    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
