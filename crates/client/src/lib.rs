//! Client side of the todo service.
//!
//! - [`api`]: typed HTTP client for `/api/todos`
//! - [`state`]: in-memory list that merges API results after each mutation
//! - [`view`]: text rendering and the add-todo form
//! - [`command`]: parsing of terminal input into user actions

pub mod api;
pub mod command;
pub mod models;
pub mod state;
pub mod view;
