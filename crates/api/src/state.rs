use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted).
/// The pool is injected here rather than held in a module-level global so
/// tests can substitute an isolated instance.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lmeval_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
