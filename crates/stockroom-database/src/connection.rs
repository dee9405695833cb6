//! PostgreSQL connection for the product store.
//!
//! Opening a [`DatabasePool`] parses the configured URL, connects eagerly
//! and applies the given collection schema, so a pool that exists is one
//! the repository can use straight away.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use stockroom_core::config::DatabaseConfig;
use stockroom_core::error::{AppError, ErrorKind};
use stockroom_entity::CollectionSchema;

use crate::migration::apply_schema;

/// The shared pool behind [`crate::ProductRepository`].
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

/// Parse `database.url` into connect options.
///
/// Malformed or empty URLs are configuration errors, not store errors,
/// since no connection was attempted.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    let url = config.url.trim();
    if url.is_empty() {
        return Err(AppError::configuration("Database URL is empty"));
    }
    url.parse::<PgConnectOptions>().map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "Database URL is not valid", e)
    })
}

impl DatabasePool {
    /// Connect and make sure `schema` exists.
    pub async fn open(config: &DatabaseConfig, schema: &CollectionSchema) -> Result<Self, AppError> {
        let options = connect_options(config)?;

        // Logged from the parsed options so the password never appears.
        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or("-"),
            user = options.get_username(),
            collection = schema.name,
            max_connections = config.max_connections,
            "Opening product store on PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to the product store: {e}"),
                    e,
                )
            })?;

        apply_schema(&pool, schema).await?;

        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Store health check failed", e))
    }

    /// Close all connections, waiting for checked-out ones to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Product store connections closed");
    }
}
