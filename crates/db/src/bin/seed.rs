//! `todo-seed` -- reset the `todos` table to a small set of sample rows.
//!
//! # Environment variables
//!
//! | Variable       | Required | Description                  |
//! |----------------|----------|------------------------------|
//! | `DATABASE_URL` | yes      | Postgres connection string   |

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_db::models::todo::SeedTodo;
use todo_db::repositories::TodoRepo;

const SAMPLE_TODOS: &[SeedTodo] = &[
    SeedTodo {
        title: "Learn Rust",
        completed: true,
    },
    SeedTodo {
        title: "Build a TODO app",
        completed: false,
    },
    SeedTodo {
        title: "Write tests with sqlx",
        completed: false,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_seed=info,todo_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = todo_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;

    todo_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let inserted = TodoRepo::reset_with(&pool, SAMPLE_TODOS)
        .await
        .context("Failed to seed todos")?;

    tracing::info!(inserted, "Database seeded successfully");
    Ok(())
}
