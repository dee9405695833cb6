//! Product repository implementation.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use stockroom_core::error::{AppError, ErrorKind};
use stockroom_core::result::AppResult;
use stockroom_entity::{Product, ProductDraft};

use crate::connection::DatabasePool;
use crate::store::{DUPLICATE_NAME_MESSAGE, ProductStore};

const RETURNING: &str = "id, name, shopname, quantity, costprice, unit, created_at, updated_at";

/// PostgreSQL-backed [`ProductStore`].
///
/// The `products` table must exist; see [`crate::migration::apply_schema`].
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabasePool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

/// Translate a failed write, surfacing the unique name index as a
/// validation error.
fn write_error(action: &str, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::validation(DUPLICATE_NAME_MESSAGE);
        }
        if db_err.is_check_violation() {
            return AppError::validation(format!("Product rejected by store: {db_err}"));
        }
    }
    AppError::with_source(ErrorKind::Database, format!("Failed to {action}"), err)
}

fn read_error(action: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("Failed to {action}"), err)
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn insert(&self, draft: &ProductDraft) -> AppResult<Product> {
        let sql = format!(
            "INSERT INTO products (name, shopname, quantity, costprice, unit) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {RETURNING}"
        );
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(&draft.name)
            .bind(&draft.shopname)
            .bind(draft.quantity)
            .bind(draft.costprice)
            .bind(draft.unit.as_str())
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| write_error("create product", e))?;

        debug!(product_id = %product.id, "Inserted product row");
        Ok(product)
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let sql = format!("SELECT {RETURNING} FROM products ORDER BY created_at DESC");
        sqlx::query_as::<_, Product>(&sql)
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| read_error("list products", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let sql = format!("SELECT {RETURNING} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| read_error("find product", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        let sql = format!("SELECT {RETURNING} FROM products WHERE name = $1");
        sqlx::query_as::<_, Product>(&sql)
            .bind(name)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| read_error("find product by name", e))
    }

    async fn replace(&self, id: Uuid, draft: &ProductDraft) -> AppResult<Option<Product>> {
        let sql = format!(
            "UPDATE products \
             SET name = $2, shopname = $3, quantity = $4, costprice = $5, unit = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING {RETURNING}"
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.shopname)
            .bind(draft.quantity)
            .bind(draft.costprice)
            .bind(draft.unit.as_str())
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| write_error("update product", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>> {
        let sql = format!("DELETE FROM products WHERE id = $1 RETURNING {RETURNING}");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| write_error("delete product", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.health_check().await
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
