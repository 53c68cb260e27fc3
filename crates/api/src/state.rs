use std::sync::Arc;

use todo_db::store::TodoStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Todo persistence (Postgres in production).
    pub store: Arc<dyn TodoStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
