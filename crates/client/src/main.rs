//! `todo` -- terminal front end for the todo API.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                 | Description         |
//! |----------------|----------|-------------------------|---------------------|
//! | `TODO_API_URL` | no       | `http://localhost:3000` | API server root URL |

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_client::api::TodoApi;
use todo_client::command::{Command, HELP};
use todo_client::state::TodoListState;
use todo_client::view::{self, AddForm};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered list.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api_url = std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    tracing::info!(%api_url, "Using todo API");

    let api = TodoApi::new(api_url);
    let mut state = TodoListState::new();
    let mut form = AddForm::new();

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    state.load(&api).await;
    print_screen(&mut stdout, &state).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                stdout.write_all(format!("{e}\n").as_bytes()).await?;
                continue;
            }
        };

        match command {
            Command::Add(text) => {
                form.set_draft(text);
                let Some(title) = form.submit() else {
                    stdout.write_all(b"title cannot be empty\n").await?;
                    continue;
                };
                state.add(&api, &title).await;
            }
            Command::Toggle(position) | Command::Delete(position)
                if state.id_at(position).is_none() =>
            {
                stdout
                    .write_all(format!("no item {position}\n").as_bytes())
                    .await?;
                continue;
            }
            Command::Toggle(position) => {
                if let Some(todo) = state.todos().get(position - 1).cloned() {
                    state.toggle(&api, todo.id, !todo.completed).await;
                }
            }
            Command::Delete(position) => {
                if let Some(id) = state.id_at(position) {
                    state.remove(&api, id).await;
                }
            }
            Command::List => state.load(&api).await,
            Command::Help => {
                stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
                continue;
            }
            Command::Quit => break,
        }

        print_screen(&mut stdout, &state).await?;
    }

    Ok(())
}

async fn print_screen(stdout: &mut tokio::io::Stdout, state: &TodoListState) -> anyhow::Result<()> {
    let screen = view::render_app(state);
    stdout.write_all(format!("\n{screen}\n\n").as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
