//! Route definitions for the todo resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Todo routes mounted at `/api/todos`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list).post(todo::create))
        .route(
            "/{id}",
            get(todo::get_by_id)
                .patch(todo::update)
                .delete(todo::delete),
        )
}
