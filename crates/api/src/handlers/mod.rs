//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! [`TodoStore`](todo_db::store::TodoStore) held in [`AppState`](crate::state::AppState)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod todo;
