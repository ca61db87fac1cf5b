use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use todo_server::{app, ErrorResponse, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Sends one request through a clone of `app`, so state is shared across calls.
async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn create(app: &Router, owner: &str, body: &str) -> Todo {
    let resp = send(app, json_request("POST", &format!("/todos?userRole={owner}"), body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

async fn list(app: &Router, owner: &str) -> Vec<Todo> {
    let resp = send(app, empty_request("GET", &format!("/todos?userRole={owner}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// --- health ---

#[tokio::test]
async fn health_reports_ok() {
    let resp = send(&app(), empty_request("GET", "/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let app = app();
    assert!(list(&app, "alice").await.is_empty());
}

#[tokio::test]
async fn list_without_owner_is_empty() {
    let app = app();
    create(&app, "alice", r#"{"title":"Buy milk"}"#).await;

    let resp = send(&app, empty_request("GET", "/todos")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());

    let resp = send(&app, empty_request("GET", "/todos?userRole=")).await;
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn list_preserves_creation_order_per_owner() {
    let app = app();
    let first = create(&app, "alice", r#"{"title":"first"}"#).await;
    create(&app, "bob", r#"{"title":"other"}"#).await;
    let second = create(&app, "alice", r#"{"title":"second"}"#).await;

    assert_eq!(list(&app, "alice").await, vec![first, second]);
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"Buy milk","notes":"oat"}"#).await;

    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.notes.as_deref(), Some("oat"));
    assert_eq!(todo.user_id, "alice");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_ignores_completed_in_body() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"Already done","completed":true}"#).await;
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_response_uses_camel_case() {
    let app = app();
    let resp = send(
        &app,
        json_request("POST", "/todos?userRole=alice", r#"{"title":"Buy milk"}"#),
    )
    .await;
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["userId"], "alice");
    assert!(body["createdAt"].is_string());
    assert!(body.get("notes").is_none());
}

#[tokio::test]
async fn create_todo_missing_title_returns_422() {
    let resp = send(
        &app(),
        json_request("POST", "/todos?userRole=alice", r#"{"notes":"no title"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_todo_blank_title_returns_400() {
    let resp = send(
        &app(),
        json_request("POST", "/todos?userRole=alice", r#"{"title":"  "}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: ErrorResponse = body_json(resp).await;
    assert_eq!(err.status, 400);
    assert_eq!(err.title, "Bad Request");
}

#[tokio::test]
async fn create_todo_without_owner_returns_400() {
    let app = app();
    let resp = send(&app, json_request("POST", "/todos", r#"{"title":"orphan"}"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- get ---

#[tokio::test]
async fn get_todo_is_owner_scoped() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"mine"}"#).await;

    let resp = send(
        &app,
        empty_request("GET", &format!("/todos/{}?userRole=alice", todo.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched, todo);

    let resp = send(
        &app,
        empty_request("GET", &format!("/todos/{}?userRole=bob", todo.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_todo_bad_uuid_returns_400() {
    let resp = send(&app(), empty_request("GET", "/todos/not-a-uuid?userRole=alice")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_todo_not_found() {
    let resp = send(
        &app(),
        json_request(
            "PUT",
            "/todos/00000000-0000-0000-0000-000000000000?userRole=alice",
            r#"{"title":"Nope"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: ErrorResponse = body_json(resp).await;
    assert_eq!(err.status, 404);
}

#[tokio::test]
async fn update_with_wrong_owner_leaves_record_untouched() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"private"}"#).await;

    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/todos/{}?userRole=bob", todo.id),
            r#"{"completed":true}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(list(&app, "alice").await, vec![todo]);
}

#[tokio::test]
async fn update_cannot_reassign_owner_or_id() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"mine"}"#).await;

    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/todos/{}?userRole=alice", todo.id),
            r#"{"userId":"bob","id":"00000000-0000-0000-0000-000000000000","notes":"edited"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.id, todo.id);
    assert_eq!(updated.user_id, "alice");
    assert_eq!(updated.created_at, todo.created_at);
    assert_eq!(updated.notes.as_deref(), Some("edited"));
    assert!(list(&app, "bob").await.is_empty());
}

#[tokio::test]
async fn update_with_null_notes_clears_them() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"t","notes":"oat"}"#).await;
    assert_eq!(todo.notes.as_deref(), Some("oat"));

    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/todos/{}?userRole=alice", todo.id),
            r#"{"notes":null}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.notes, None);
    assert_eq!(updated.title, "t");
    assert_eq!(list(&app, "alice").await[0].notes, None);
}

#[tokio::test]
async fn update_blank_title_returns_400() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"mine"}"#).await;

    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/todos/{}?userRole=alice", todo.id),
            r#"{"title":""}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = send(
        &app(),
        empty_request(
            "DELETE",
            "/todos/00000000-0000-0000-0000-000000000000?userRole=alice",
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_without_owner_is_not_found() {
    let app = app();
    let todo = create(&app, "alice", r#"{"title":"mine"}"#).await;

    let resp = send(&app, empty_request("DELETE", &format!("/todos/{}", todo.id))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(list(&app, "alice").await.len(), 1);
}

// --- full lifecycle ---

#[tokio::test]
async fn buy_milk_lifecycle() {
    let app = app();

    let created = create(&app, "alice", r#"{"title":"Buy milk"}"#).await;
    assert!(!created.completed);
    assert_eq!(created.user_id, "alice");
    let id = created.id;

    assert!(list(&app, "bob").await.is_empty());

    // update: only completed changes
    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/todos/{id}?userRole=alice"),
            r#"{"completed":true}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert!(updated.completed);
    assert_eq!(updated.title, "Buy milk");
    assert_eq!(updated.created_at, created.created_at);

    // wrong owner cannot delete
    let resp = send(&app, empty_request("DELETE", &format!("/todos/{id}?userRole=bob"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, empty_request("DELETE", &format!("/todos/{id}?userRole=alice"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: bool = body_json(resp).await;
    assert!(deleted);

    assert!(list(&app, "alice").await.is_empty());

    // second delete reports not-found
    let resp = send(&app, empty_request("DELETE", &format!("/todos/{id}?userRole=alice"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
