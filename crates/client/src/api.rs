//! HTTP client for the todo REST API.
//!
//! Wraps `GET/POST /api/todos` and `PATCH/DELETE /api/todos/{id}` using
//! [`reqwest`].

use serde::de::DeserializeOwned;
use serde_json::json;
use todo_core::types::DbId;

use crate::models::{Todo, TodoPatch};

/// Errors from the todo REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Todo API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for a single todo API server.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl TodoApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:3000`. A trailing
    ///   slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_url(&self, id: DbId) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    /// Fetch all todos, newest first.
    pub async fn fetch_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.client.get(self.todos_url()).send().await?;
        Self::parse_response(response).await
    }

    /// Create a todo. The server trims `title` and rejects blank input.
    pub async fn create_todo(&self, title: &str) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(self.todos_url())
            .json(&json!({ "title": title }))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Apply a partial update to a todo.
    pub async fn update_todo(&self, id: DbId, patch: &TodoPatch) -> Result<Todo, ClientError> {
        let response = self
            .client
            .patch(self.todo_url(id))
            .json(patch)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a todo.
    pub async fn delete_todo(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.todo_url(id)).send().await?;
        Self::check_status(response).await
    }

    /// Parse a successful JSON response, or return an [`ClientError::Api`]
    /// for non-2xx status codes.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::error_for_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Check that the response has a 2xx status, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::error_for_status(response).await.map(|_| ())
    }

    async fn error_for_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
