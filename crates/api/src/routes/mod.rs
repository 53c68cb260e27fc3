pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                 service + database health
///
/// /todos                  list, create
/// /todos/{id}             get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/todos", todo::router())
}
