//! Domain types, errors, and validation rules shared by the todo service
//! and its clients. Nothing in this crate performs I/O.

pub mod error;
pub mod todo;
pub mod types;
