//! Todo repository
//!
//! One statement per operation against the `todos` table:
//! - create: INSERT ... RETURNING the generated id
//! - update/delete: rows-affected count decides 404 (no check-then-write)

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{DbError, Storage};
use crate::models::{Todo, TodoId, TodoPayload};

use super::TodoStore;

const RESOURCE: &str = "todo";

/// PostgreSQL-backed todo store
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    storage: Storage,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            storage: Storage::new(pool),
        }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.storage.execute(sqlx::query("SELECT 1")).await?;
        Ok(())
    }

    async fn create(&self, payload: TodoPayload) -> Result<Todo, DbError> {
        let inserted: Option<(i64,)> = self
            .storage
            .query_one(
                sqlx::query_as(
                    "INSERT INTO todos (title, detail, point, done) VALUES ($1, $2, $3, $4) RETURNING id",
                )
                .bind(&payload.title)
                .bind(&payload.detail)
                .bind(payload.point)
                .bind(payload.done),
            )
            .await?;

        // INSERT ... RETURNING always yields a row on success
        let (id,) = inserted.ok_or(DbError::Query(sqlx::Error::RowNotFound))?;
        tracing::debug!(id, "todo created");

        Ok(Todo::from_payload(TodoId::new(id), payload))
    }

    async fn list(&self) -> Result<Vec<Todo>, DbError> {
        self.storage
            .query(sqlx::query_as(
                "SELECT id, title, detail, point, done FROM todos ORDER BY id",
            ))
            .await
    }

    async fn get(&self, id: TodoId) -> Result<Todo, DbError> {
        self.storage
            .query_one(
                sqlx::query_as("SELECT id, title, detail, point, done FROM todos WHERE id = $1")
                    .bind(id.get()),
            )
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    async fn update(&self, id: TodoId, payload: TodoPayload) -> Result<Todo, DbError> {
        let affected = self
            .storage
            .execute(
                sqlx::query(
                    "UPDATE todos SET title = $1, detail = $2, point = $3, done = $4 WHERE id = $5",
                )
                .bind(&payload.title)
                .bind(&payload.detail)
                .bind(payload.point)
                .bind(payload.done)
                .bind(id.get()),
            )
            .await?;

        if affected == 0 {
            return Err(DbError::not_found(RESOURCE, id));
        }

        Ok(Todo::from_payload(id, payload))
    }

    async fn delete(&self, id: TodoId) -> Result<(), DbError> {
        let affected = self
            .storage
            .execute(sqlx::query("DELETE FROM todos WHERE id = $1").bind(id.get()))
            .await?;

        if affected == 0 {
            return Err(DbError::not_found(RESOURCE, id));
        }

        Ok(())
    }
}
