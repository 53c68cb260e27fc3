//! Text rendering for the terminal front end.

use std::fmt::Write;

use crate::models::Todo;
use crate::state::TodoListState;

pub const HEADING: &str = "TODO App";
pub const EMPTY_LIST: &str = "No todos yet. Add one above!";
pub const LOADING: &str = "Loading...";

/// Draft title for a new todo.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    draft: String,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Take the trimmed draft for submission.
    ///
    /// A blank draft yields `None` and is kept as typed; otherwise the draft
    /// is cleared.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let title = trimmed.to_string();
        self.draft.clear();
        Some(title)
    }
}

/// Render one todo as `<n>. [x] title`.
pub fn render_item(position: usize, todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("{position}. [{mark}] {}", todo.title)
}

/// Render the list, numbering items from 1.
pub fn render_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return EMPTY_LIST.to_string();
    }
    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| render_item(i + 1, todo))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the whole screen: heading, optional error, then list or loading.
pub fn render_app(state: &TodoListState) -> String {
    let mut out = String::from(HEADING);
    out.push('\n');
    if let Some(error) = state.error() {
        let _ = writeln!(out, "error: {error}");
    }
    if state.is_loading() {
        out.push_str(LOADING);
    } else {
        out.push_str(&render_list(state.todos()));
    }
    out
}
