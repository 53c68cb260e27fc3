//! Handlers for the todo resource.
//!
//! Request bodies are deserialized loosely and validated with the rules in
//! [`todo_core::todo`] before anything reaches the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use todo_core::error::CoreError;
use todo_core::todo::{self as rules, ENTITY};
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, UpdateTodo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Body of `POST /api/todos`.
///
/// `title` stays untyped so a missing or non-string title surfaces as a
/// validation error instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
}

/// Body of `PATCH /api/todos/{id}`.
///
/// A key set to `null` is `Some(Value::Null)`; only an absent key is `None`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub completed: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Read a request DTO out of a JSON object body.
///
/// Arrays are refused up front; serde would otherwise fill struct fields
/// positionally from them.
fn from_object<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    if !body.is_object() {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::BadRequest("Request body must be a JSON object".to_string())
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /api/todos
///
/// List all todos, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// GET /api/todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(todo))
}

/// POST /api/todos
///
/// Create a todo from a trimmed, non-empty title. Always starts incomplete.
/// A missing body or one that is not a JSON object has no title.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input: CreateTodoRequest = match body {
        Ok(Json(value)) if value.is_object() => from_object(value)?,
        Ok(_) | Err(JsonRejection::MissingJsonContentType(_)) => CreateTodoRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let title = rules::validate_new_title(input.title.as_ref())?;

    let todo = state.store.create(&CreateTodo { title }).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /api/todos/{id}
///
/// Apply whichever of `title` / `completed` the body carries.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(body): AppJson<Value>,
) -> AppResult<impl IntoResponse> {
    let input: UpdateTodoRequest = from_object(body)?;

    let dto = UpdateTodo {
        title: rules::validate_title_patch(input.title.as_ref())?,
        completed: input.completed.as_ref().map(rules::coerce_completed),
    };

    let todo = state
        .store
        .update(id, &dto)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        todo_id = id,
        title_changed = dto.title.is_some(),
        completed = ?dto.completed,
        "Todo updated",
    );

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete(id).await?;

    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
