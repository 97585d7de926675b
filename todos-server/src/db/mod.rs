//! Database layer - connection pool, storage accessor and stores
//!
//! # Design Principles
//!
//! - One connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Every statement is parameterized via `.bind()`
//! - Keyed writes report "not found" from the rows-affected count, no check-then-write

pub mod error;
pub mod pool;
pub mod repos;
pub mod storage;

pub use error::DbError;
pub use pool::{create_pool, DbConfig, DEFAULT_MAX_CONNECTIONS};
pub use repos::{MemoryTodoStore, PgTodoStore, TodoStore};
pub use storage::Storage;

/// Schema for the `todos` table, applied by deployment tooling.
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");
