//! HTTP handlers for the `/todos` resource.
//!
//! Every handler reads the owner tag from `?userRole=`. Reads and mutations
//! without a tag match nothing; creating without one is rejected because the
//! new record would have no owner.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{CreateTodo, OwnerQuery, Todo, UpdateTodo};
use crate::store::TodoStore;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Json<Vec<Todo>> {
    let todos = match query.owner() {
        Some(owner) => state.store.find_all(owner).await,
        None => Vec::new(),
    };
    Json(todos)
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Todo>, AppError> {
    let owner = query.owner().ok_or_else(AppError::todo_not_found)?;
    state
        .store
        .find_one(id, owner)
        .await
        .map(Json)
        .ok_or_else(AppError::todo_not_found)
}

async fn create_todo(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let owner = query.owner().ok_or_else(AppError::missing_owner)?;
    input.validate()?;
    let todo = state.store.create(input, owner).await;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    let owner = query.owner().ok_or_else(AppError::todo_not_found)?;
    input.validate()?;
    state
        .store
        .update(id, input, owner)
        .await
        .map(Json)
        .ok_or_else(AppError::todo_not_found)
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<bool>, AppError> {
    let owner = query.owner().ok_or_else(AppError::todo_not_found)?;
    if state.store.delete(id, owner).await {
        Ok(Json(true))
    } else {
        Err(AppError::todo_not_found())
    }
}
