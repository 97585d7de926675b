//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool connects eagerly
//! so an unreachable database fails startup instead of the first request.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::DbError;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the todos database.
///
/// `url` wins over the individual parts when set.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: "todos".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DbConfig {
    /// Build sqlx connect options from this config.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] if `url` is set but cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DbError> {
        if let Some(url) = &self.url {
            return url.parse().map_err(DbError::Connection);
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns [`DbError::Connection`] if the database cannot be reached.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, DbError> {
    let options = config.connect_options()?;

    tracing::info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(DbError::Connection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DbConfig::default();
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.url.is_none());
    }

    #[test]
    fn options_from_parts() {
        let config = DbConfig {
            host: "db.internal".into(),
            port: 6543,
            user: "app".into(),
            password: Some("secret".into()),
            database: "todo_app".into(),
            ..DbConfig::default()
        };
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("todo_app"));
    }

    #[test]
    fn url_overrides_parts() {
        let config = DbConfig {
            url: Some("postgres://alice@pg.example:7000/from_url".into()),
            host: "ignored".into(),
            ..DbConfig::default()
        };
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "pg.example");
        assert_eq!(options.get_port(), 7000);
        assert_eq!(options.get_username(), "alice");
        assert_eq!(options.get_database(), Some("from_url"));
    }

    #[test]
    fn bad_url_is_connection_error() {
        let config = DbConfig {
            url: Some("not a url".into()),
            ..DbConfig::default()
        };
        assert!(matches!(
            config.connect_options(),
            Err(DbError::Connection(_))
        ));
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p todos-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = DbConfig {
            url: Some(url),
            ..DbConfig::default()
        };
        let pool = create_pool(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
