#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_core::types::{DbId, Timestamp};
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::store::TodoStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router over `store`.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_test_app(store: Arc<dyn TodoStore>) -> Router {
    build_app_router(AppState {
        store,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Rows {
    next_id: DbId,
    todos: Vec<Todo>,
}

/// In-process [`TodoStore`] with the same observable semantics as Postgres:
/// monotonic ids, strictly increasing timestamps, newest-first listing.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Rows>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().todos.len()
    }

    pub fn get(&self, id: DbId) -> Option<Todo> {
        self.rows
            .lock()
            .unwrap()
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }
}

/// Deterministic clock: every tick is one second after the previous one.
fn tick(seq: DbId) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seq)
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        let mut todos = self.rows.lock().unwrap().todos.clone();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(todos)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        Ok(self.get(id))
    }

    async fn create(&self, dto: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        rows.next_id += 1;
        let now = tick(rows.next_id * 10);
        let todo = Todo {
            id: rows.next_id,
            title: dto.title.clone(),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        rows.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: DbId, dto: &UpdateTodo) -> Result<Option<Todo>, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let Some(todo) = rows.todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &dto.title {
            todo.title = title.clone();
        }
        if let Some(completed) = dto.completed {
            todo.completed = completed;
        }
        todo.updated_at += Duration::seconds(1);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.todos.len();
        rows.todos.retain(|t| t.id != id);
        Ok(rows.todos.len() < before)
    }
}

/// [`TodoStore`] whose every call fails as if the database were down.
pub struct FailingStore;

fn unavailable() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

#[async_trait]
impl TodoStore for FailingStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        Err(unavailable())
    }

    async fn create(&self, _dto: &CreateTodo) -> Result<Todo, sqlx::Error> {
        Err(unavailable())
    }

    async fn update(&self, _id: DbId, _dto: &UpdateTodo) -> Result<Option<Todo>, sqlx::Error> {
        Err(unavailable())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(unavailable())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a body verbatim, with an optional content-type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::PATCH, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a todo through the API and return its id.
pub async fn create_todo(app: Router, title: &str) -> DbId {
    let response = post_json(app, "/api/todos", serde_json::json!({ "title": title })).await;
    body_json(response).await["id"].as_i64().unwrap()
}
