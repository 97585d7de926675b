//! Todo stores
//!
//! Handlers only see [`TodoStore`]; the server is handed a concrete store at
//! startup:
//! - [`PgTodoStore`]: the `todos` table through the storage accessor
//! - [`MemoryTodoStore`]: process-local map with the same contract

use async_trait::async_trait;

use crate::models::{Todo, TodoId, TodoPayload};

use super::DbError;

pub mod memory;
pub mod todos;

pub use memory::MemoryTodoStore;
pub use todos::PgTodoStore;

/// CRUD over todo records.
///
/// Keyed operations return [`DbError::NotFound`] when no record has the id.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Short backend name reported by `/health`.
    fn backend(&self) -> &'static str;

    /// Check that the backing storage answers.
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    /// Insert a record; the store assigns a fresh, strictly increasing id.
    async fn create(&self, payload: TodoPayload) -> Result<Todo, DbError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Todo>, DbError>;

    async fn get(&self, id: TodoId) -> Result<Todo, DbError>;

    /// Replace every field of the record with `id`.
    async fn update(&self, id: TodoId, payload: TodoPayload) -> Result<Todo, DbError>;

    async fn delete(&self, id: TodoId) -> Result<(), DbError>;
}
