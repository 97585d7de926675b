//! In-memory todo store
//!
//! Ids start at 1 and are never reused, matching a BIGSERIAL column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::DbError;
use crate::models::{Todo, TodoId, TodoPayload};

use super::TodoStore;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// Process-local todo store
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, payload: TodoPayload) -> Result<Todo, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo::from_payload(TodoId::new(inner.last_id), payload);
        inner.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>, DbError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: TodoId) -> Result<Todo, DbError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id.get())
            .cloned()
            .ok_or_else(|| DbError::not_found("todo", id))
    }

    async fn update(&self, id: TodoId, payload: TodoPayload) -> Result<Todo, DbError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id.get())
            .ok_or_else(|| DbError::not_found("todo", id))?;
        *row = Todo::from_payload(id, payload);
        Ok(row.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<(), DbError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("todo", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> TodoPayload {
        TodoPayload {
            title: title.into(),
            ..TodoPayload::default()
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryTodoStore::new();
        let first = store.create(payload("a")).await.unwrap();
        store.delete(TodoId::new(first.id)).await.unwrap();
        let second = store.create(payload("b")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn always_answers_ping() {
        let store = MemoryTodoStore::new();
        assert_eq!(store.backend(), "memory");
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn list_is_insertion_ordered() {
        let store = MemoryTodoStore::new();
        for title in ["x", "y", "z"] {
            store.create(payload(title)).await.unwrap();
        }
        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["x", "y", "z"]);
    }

    #[tokio::test]
    async fn update_missing_leaves_store_untouched() {
        let store = MemoryTodoStore::new();
        store.create(payload("keep")).await.unwrap();

        let err = store.update(TodoId::new(7), payload("nope")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "todo", .. }));

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "keep");
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(MemoryTodoStore::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(payload(&i.to_string())).await.unwrap().id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked"));
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }
}
