//! HTTP server command
//!
//! Resolves configuration from flags and environment (flags win), connects to
//! storage and serves until shutdown. Any startup failure exits before the
//! listener is bound.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use todos_server::db::{create_pool, DEFAULT_MAX_CONNECTIONS};
use todos_server::{run_server, AppState, DbConfig, MemoryTodoStore, PgTodoStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host or IP to bind the HTTP server to (empty = all interfaces)
    #[arg(long, env = "AP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "AP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Full database URL (overrides the individual --db-* settings)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASS", hide_env_values = true)]
    pub db_pass: Option<String>,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "todos")]
    pub db_name: String,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep todos in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_pass.clone(),
            database: self.db_name.clone(),
            max_connections: self.max_connections,
        }
    }

    /// `host:port` to resolve for the listener.
    pub fn bind_target(&self) -> String {
        let host = match self.host.trim() {
            "" => "0.0.0.0",
            host => host,
        };
        format!("{}:{}", host, self.port)
    }
}

async fn resolve_bind_addr(target: &str) -> Result<SocketAddr> {
    tokio::net::lookup_host(target)
        .await
        .with_context(|| format!("Failed to resolve bind address {target}"))?
        .next()
        .with_context(|| format!("No address found for {target}"))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = resolve_bind_addr(&args.bind_target()).await?;

    let state = if args.in_memory {
        tracing::warn!("Using in-memory store; todos are lost on exit");
        AppState::new(MemoryTodoStore::new())
    } else {
        let pool = create_pool(&args.db_config())
            .await
            .context("Failed to connect to database")?;
        AppState::new(PgTodoStore::new(pool))
    };

    tracing::info!("Starting todos server on {}", bind_addr);

    run_server(state, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
