//! Repository for the `todos` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, SeedTodo, Todo, UpdateTodo};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, title, completed, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List every todo, newest first.
    ///
    /// `id` breaks ties between rows created within the same timestamp tick.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new todo. `completed` takes the column default (`false`).
    pub async fn create(pool: &PgPool, dto: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!("INSERT INTO todos (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(&dto.title)
            .fetch_one(pool)
            .await
    }

    /// Partially update a todo.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None` if
    /// no row matches `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET \
                 title = COALESCE($2, title), \
                 completed = COALESCE($3, completed) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(dto.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the whole table with `rows` in a single transaction.
    ///
    /// Rows are inserted in slice order, so the last one lists first.
    pub async fn reset_with(pool: &PgPool, rows: &[SeedTodo]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM todos").execute(&mut *tx).await?;

        for row in rows {
            sqlx::query("INSERT INTO todos (title, completed) VALUES ($1, $2)")
                .bind(row.title)
                .bind(row.completed)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(rows.len() as u64)
    }
}
