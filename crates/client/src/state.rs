//! Client state container.
//!
//! Holds the list shown to the user. Every mutation awaits its API call and
//! only then merges the result; a failure sets one static error message per
//! category and leaves the list as it was.

use todo_core::types::DbId;

use crate::api::TodoApi;
use crate::models::{Todo, TodoPatch};

pub const LOAD_FAILED: &str = "Failed to load todos";
pub const ADD_FAILED: &str = "Failed to add todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";

/// The todo list as the front end sees it.
#[derive(Debug, Clone)]
pub struct TodoListState {
    todos: Vec<Todo>,
    loading: bool,
    error: Option<&'static str>,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListState {
    /// An empty list that has not been fetched yet.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Id of the todo at 1-based display position `position`.
    pub fn id_at(&self, position: usize) -> Option<DbId> {
        position
            .checked_sub(1)
            .and_then(|i| self.todos.get(i))
            .map(|t| t.id)
    }

    /// Fetch the full list, replacing local state.
    ///
    /// Clears any previous error first; `loading` is false afterwards either way.
    pub async fn load(&mut self, api: &TodoApi) {
        self.error = None;
        match api.fetch_todos().await {
            Ok(todos) => self.todos = todos,
            Err(e) => {
                tracing::warn!(error = %e, "Loading todos failed");
                self.error = Some(LOAD_FAILED);
            }
        }
        self.loading = false;
    }

    /// Create a todo and prepend it.
    pub async fn add(&mut self, api: &TodoApi, title: &str) {
        match api.create_todo(title).await {
            Ok(todo) => self.apply_created(todo),
            Err(e) => {
                tracing::warn!(error = %e, "Creating todo failed");
                self.error = Some(ADD_FAILED);
            }
        }
    }

    /// Set the completion flag of `id` and replace the local copy.
    pub async fn toggle(&mut self, api: &TodoApi, id: DbId, completed: bool) {
        match api.update_todo(id, &TodoPatch::completed(completed)).await {
            Ok(todo) => self.apply_updated(todo),
            Err(e) => {
                tracing::warn!(todo_id = id, error = %e, "Updating todo failed");
                self.error = Some(UPDATE_FAILED);
            }
        }
    }

    /// Delete `id` and drop it from the list.
    pub async fn remove(&mut self, api: &TodoApi, id: DbId) {
        match api.delete_todo(id).await {
            Ok(()) => self.apply_deleted(id),
            Err(e) => {
                tracing::warn!(todo_id = id, error = %e, "Deleting todo failed");
                self.error = Some(DELETE_FAILED);
            }
        }
    }

    fn apply_created(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    fn apply_updated(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }

    fn apply_deleted(&mut self, id: DbId) {
        self.todos.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn todo(id: DbId, title: &str) -> Todo {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Todo {
            id,
            title: title.to_string(),
            completed: false,
            created_at: at,
            updated_at: at,
        }
    }

    fn state_with(todos: Vec<Todo>) -> TodoListState {
        TodoListState {
            todos,
            loading: false,
            error: None,
        }
    }

    #[test]
    fn starts_loading_and_empty() {
        let state = TodoListState::new();
        assert!(state.is_loading());
        assert!(state.todos().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn created_is_prepended() {
        let mut state = state_with(vec![todo(1, "old")]);
        state.apply_created(todo(2, "new"));
        let ids: Vec<DbId> = state.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn updated_replaces_by_id_in_place() {
        let mut state = state_with(vec![todo(2, "b"), todo(1, "a")]);
        let mut changed = todo(1, "a");
        changed.completed = true;
        state.apply_updated(changed);

        assert!(state.todos()[1].completed);
        assert!(!state.todos()[0].completed);
    }

    #[test]
    fn updated_for_unknown_id_is_ignored() {
        let mut state = state_with(vec![todo(1, "a")]);
        state.apply_updated(todo(9, "ghost"));
        assert_eq!(state.todos().len(), 1);
        assert_eq!(state.todos()[0].title, "a");
    }

    #[test]
    fn deleted_is_filtered_out() {
        let mut state = state_with(vec![todo(2, "b"), todo(1, "a")]);
        state.apply_deleted(2);
        let ids: Vec<DbId> = state.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, [1]);
    }

    #[test]
    fn id_at_is_one_based() {
        let state = state_with(vec![todo(5, "x"), todo(3, "y")]);
        assert_eq!(state.id_at(0), None);
        assert_eq!(state.id_at(1), Some(5));
        assert_eq!(state.id_at(2), Some(3));
        assert_eq!(state.id_at(3), None);
    }
}
