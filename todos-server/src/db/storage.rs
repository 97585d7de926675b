//! Storage accessor
//!
//! Thin wrapper over the pool that every SQL statement goes through. Callers
//! build statements with `sqlx::query` / `sqlx::query_as` and `.bind()`, so
//! values never end up concatenated into SQL text. Connections are checked out
//! per statement and returned to the pool on every exit path.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, PgPool, Postgres};

use super::DbError;

#[derive(Debug, Clone)]
pub struct Storage {
    pool: PgPool,
}

impl Storage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a statement that returns no rows; yields the rows-affected count.
    pub async fn execute<'q>(
        &self,
        statement: Query<'q, Postgres, PgArguments>,
    ) -> Result<u64, DbError> {
        let result = statement.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Run a statement and decode every returned row.
    pub async fn query<'q, T>(
        &self,
        statement: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Vec<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(statement.fetch_all(&self.pool).await?)
    }

    /// Run a statement expected to return at most one row.
    pub async fn query_one<'q, T>(
        &self,
        statement: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Option<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(statement.fetch_optional(&self.pool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Run with: DATABASE_URL=postgres://... cargo test -p todos-server -- --ignored

    async fn storage() -> Storage {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        Storage::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn query_one_binds_parameters() {
        let storage = storage().await;
        let row: Option<(i64, String)> = storage
            .query_one(sqlx::query_as("SELECT $1::bigint, $2::text").bind(7_i64).bind("x'; --"))
            .await
            .expect("query failed");

        assert_eq!(row, Some((7, "x'; --".to_string())));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn malformed_statement_is_query_error() {
        let storage = storage().await;
        let err = storage
            .execute(sqlx::query("SELEC nothing"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Query(_)));
    }
}
