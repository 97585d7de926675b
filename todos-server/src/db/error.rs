//! Storage error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The pool could not reach the database.
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Malformed statement or constraint violation.
    #[error("query error: {0}")]
    Query(#[source] sqlx::Error),

    /// A row could not be decoded into a record.
    #[error("row decode error: {0}")]
    Decode(#[source] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(e),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => Self::Decode(e),
            _ => Self::Query(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_are_connection_errors() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::Connection(_)
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::Connection(_)
        ));
    }

    #[test]
    fn missing_column_is_decode_error() {
        let err = DbError::from(sqlx::Error::ColumnNotFound("title".into()));
        assert!(matches!(err, DbError::Decode(_)));
    }

    #[test]
    fn row_not_found_is_query_error() {
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Query(_)
        ));
    }

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("todo", 42);
        assert_eq!(err.to_string(), "not found: todo '42'");
    }
}
