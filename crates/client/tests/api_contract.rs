//! Todo API client contract tests.
//!
//! Verify request shapes and response/error mapping against a wiremock
//! server standing in for the REST API.

use assert_matches::assert_matches;
use serde_json::json;
use todo_client::api::{ClientError, TodoApi};
use todo_client::models::TodoPatch;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn todo_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "completed": completed,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
    })
}

#[tokio::test]
async fn fetch_todos_parses_camel_case_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            todo_json(2, "Second", true),
            todo_json(1, "First", false),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let todos = TodoApi::new(server.uri()).fetch_todos().await.unwrap();

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, 2);
    assert!(todos[0].completed);
    assert_eq!(todos[1].title, "First");
    assert_eq!(todos[1].created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[tokio::test]
async fn create_todo_posts_title() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .and(body_json(json!({"title": "New Todo"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(todo_json(3, "New Todo", false)))
        .expect(1)
        .mount(&server)
        .await;

    let todo = TodoApi::new(server.uri()).create_todo("New Todo").await.unwrap();

    assert_eq!(todo.id, 3);
    assert_eq!(todo.title, "New Todo");
}

#[tokio::test]
async fn update_todo_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/todos/5"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json(5, "Task", true)))
        .expect(1)
        .mount(&server)
        .await;

    let todo = TodoApi::new(server.uri())
        .update_todo(5, &TodoPatch::completed(true))
        .await
        .unwrap();

    assert!(todo.completed);
}

#[tokio::test]
async fn delete_todo_accepts_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/todos/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    TodoApi::new(server.uri()).delete_todo(9).await.unwrap();
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/todos/404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": "Todo with id 404 not found", "code": "NOT_FOUND"})),
        )
        .mount(&server)
        .await;

    let err = TodoApi::new(server.uri()).delete_todo(404).await.unwrap_err();

    assert_matches!(
        err,
        ClientError::Api { status: 404, ref body } if body.contains("NOT_FOUND")
    );
}

#[tokio::test]
async fn malformed_body_maps_to_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = TodoApi::new(server.uri()).fetch_todos().await.unwrap_err();

    assert_matches!(err, ClientError::Request(_));
}
