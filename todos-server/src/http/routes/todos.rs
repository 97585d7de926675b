//! Todo endpoints
//!
//! | Method | Path          | Success         |
//! |--------|---------------|-----------------|
//! | POST   | /todos        | 201 + Todo      |
//! | GET    | /todos        | 200 + [Todo]    |
//! | GET    | /todos/{id}   | 200 + Todo      |
//! | PUT    | /todos/{id}   | 200 + Todo      |
//! | DELETE | /todos/{id}   | 200 + {id}      |

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{TodoBody, ValidTodoId};
use crate::http::server::AppState;
use crate::models::{Todo, TodoId};

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: TodoId,
}

/// POST /todos - create a todo, id assigned by storage
async fn create_todo(
    State(state): State<AppState>,
    TodoBody(payload): TodoBody,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.store().create(payload).await?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos - list all todos in insertion order
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.store().list().await?))
}

/// GET /todos/{id}
async fn get_todo(
    State(state): State<AppState>,
    ValidTodoId(id): ValidTodoId,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.store().get(id).await?))
}

/// PUT /todos/{id} - full replacement; fields missing from the body reset to zero values
async fn update_todo(
    State(state): State<AppState>,
    ValidTodoId(id): ValidTodoId,
    TodoBody(payload): TodoBody,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store().update(id, payload).await?;
    tracing::info!(%id, "updated todo");
    Ok(Json(todo))
}

/// DELETE /todos/{id}
async fn delete_todo(
    State(state): State<AppState>,
    ValidTodoId(id): ValidTodoId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.store().delete(id).await?;
    tracing::info!(%id, "deleted todo");
    Ok(Json(DeletedResponse { id }))
}

/// Todo routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}
