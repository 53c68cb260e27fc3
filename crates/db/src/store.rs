//! The storage seam between HTTP handlers and the database.
//!
//! Handlers hold an `Arc<dyn TodoStore>` so the API can be driven against
//! Postgres in production and against a substitute store in tests.

use async_trait::async_trait;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::repositories::TodoRepo;
use crate::DbPool;

/// Persistent storage for todos.
///
/// Absence is reported in-band (`None` / `false`); `Err` is reserved for
/// genuine store failures.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error>;

    async fn create(&self, dto: &CreateTodo) -> Result<Todo, sqlx::Error>;

    async fn update(&self, id: DbId, dto: &UpdateTodo) -> Result<Option<Todo>, sqlx::Error>;

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// [`TodoStore`] backed by a Postgres pool via [`TodoRepo`].
#[derive(Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        TodoRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        TodoRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, dto: &CreateTodo) -> Result<Todo, sqlx::Error> {
        TodoRepo::create(&self.pool, dto).await
    }

    async fn update(&self, id: DbId, dto: &UpdateTodo) -> Result<Option<Todo>, sqlx::Error> {
        TodoRepo::update(&self.pool, id, dto).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        TodoRepo::delete(&self.pool, id).await
    }
}
