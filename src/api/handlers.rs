//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::Result;
use crate::types::{Todo, TodoStatus};
use crate::validate;

/// Health check with system status
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let todos = state.store.count().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        todos,
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub todos: usize,
}

/// List all todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// Create a todo; status defaults to `todo` when omitted
pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<Json<Todo>> {
    let new = validate::create_payload(payload.title, payload.status)?;
    let todo = state.store.insert(new).await?;

    tracing::debug!(id = todo.id, "Todo created");
    Ok(Json(todo))
}

// Fields arrive as raw strings so that constraint violations surface as
// structured validation errors instead of body-deserialization rejections.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// Partially update a todo; only supplied fields are written
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>> {
    let id = validate::parse_id(&id)?;
    let patch = validate::update_payload(payload.title, payload.status)?;
    let todo = state.store.update(id, patch).await?;
    Ok(Json(todo))
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// Force a todo to `in-progress`
pub async fn mark_ongoing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>> {
    let id = validate::parse_id(&id)?;
    let todo = state.store.set_status(id, TodoStatus::InProgress).await?;
    Ok(Json(todo))
}

/// Force a todo to `done`
pub async fn mark_done(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>> {
    let id = validate::parse_id(&id)?;
    let todo = state.store.set_status(id, TodoStatus::Done).await?;
    Ok(Json(todo))
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = validate::parse_id(&id)?;
    state.store.delete(id).await?;

    tracing::debug!(id, "Todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
