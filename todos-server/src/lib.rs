//! todos-server: JSON CRUD over a single `todos` table
//!
//! Layers, leaves first:
//! - [`db`]: PostgreSQL pool, storage accessor and the [`TodoStore`] seam
//! - [`models`]: the todo record and its JSON payload
//! - [`http`]: axum handlers, router and server bootstrap

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbConfig, DbError, MemoryTodoStore, PgTodoStore, TodoStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{Todo, TodoId, TodoPayload, ValidationError};
