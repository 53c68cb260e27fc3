//! Repository layer: one zero-sized struct per table with async query functions.

pub mod todo_repo;

pub use todo_repo::TodoRepo;
