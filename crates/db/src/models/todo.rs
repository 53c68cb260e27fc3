//! Todo model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a todo. `title` must already be trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub title: String,
}

/// DTO for partially updating a todo. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// A fixture row written by the seed binary.
#[derive(Debug, Clone)]
pub struct SeedTodo {
    pub title: &'static str,
    pub completed: bool,
}
