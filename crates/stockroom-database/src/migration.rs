//! Applies storage-schema declarations to PostgreSQL.
//!
//! Statements are idempotent (`IF NOT EXISTS`), so running them on every
//! start is safe.

use sqlx::PgPool;
use tracing::info;

use stockroom_core::error::{AppError, ErrorKind};
use stockroom_entity::CollectionSchema;

/// Render the DDL statements for a collection.
pub fn render_ddl(schema: &CollectionSchema) -> Vec<String> {
    let columns = schema
        .columns
        .iter()
        .map(|column| {
            if column.constraints.is_empty() {
                format!("{} {}", column.name, column.sql_type)
            } else {
                format!("{} {} {}", column.name, column.sql_type, column.constraints)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut statements = vec![format!(
        "CREATE TABLE IF NOT EXISTS {} ({columns})",
        schema.name
    )];

    for index in schema.indexes {
        let unique = if index.unique { "UNIQUE " } else { "" };
        statements.push(format!(
            "CREATE {unique}INDEX IF NOT EXISTS {} ON {} ({})",
            index.name,
            schema.name,
            index.columns.join(", ")
        ));
    }

    statements
}

/// Create the collection and its indexes if they do not exist yet.
pub async fn apply_schema(pool: &PgPool, schema: &CollectionSchema) -> Result<(), AppError> {
    info!(collection = schema.name, "Applying storage schema");

    for statement in render_ddl(schema) {
        sqlx::query(&statement).execute(pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply schema for '{}': {e}", schema.name),
                e,
            )
        })?;
    }

    info!(collection = schema.name, "Storage schema ready");
    Ok(())
}
