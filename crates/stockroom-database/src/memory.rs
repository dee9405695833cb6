//! Process-local product store.
//!
//! Keeps products in a map behind an async `RwLock`. Writes take the lock
//! exclusively, which makes the name check and the insert one atomic step.
//! Nothing survives a restart; this backs the test suite and
//! `database.provider = "memory"` runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use stockroom_core::error::AppError;
use stockroom_core::result::AppResult;
use stockroom_entity::{Product, ProductDraft};

use crate::store::{DUPLICATE_NAME_MESSAGE, ProductStore};

#[derive(Debug)]
struct Row {
    /// Insertion sequence; breaks `created_at` ties.
    seq: u64,
    product: Product,
}

#[derive(Debug, Default)]
struct Table {
    rows: HashMap<Uuid, Row>,
    /// Unique index on `name`.
    by_name: HashMap<String, Uuid>,
    next_seq: u64,
}

/// In-memory [`ProductStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryProductStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, draft: &ProductDraft) -> AppResult<Product> {
        let mut table = self.table.write().await;
        if table.by_name.contains_key(&draft.name) {
            return Err(AppError::validation(DUPLICATE_NAME_MESSAGE));
        }

        let product = Product::from_draft(Uuid::now_v7(), draft, Utc::now());
        let seq = table.next_seq;
        table.next_seq += 1;
        table.by_name.insert(product.name.clone(), product.id);
        table.rows.insert(
            product.id,
            Row {
                seq,
                product: product.clone(),
            },
        );

        debug!(product_id = %product.id, "Inserted product in memory");
        Ok(product)
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let table = self.table.read().await;
        let mut rows: Vec<&Row> = table.rows.values().collect();
        rows.sort_by(|a, b| {
            b.product
                .created_at
                .cmp(&a.product.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(rows.into_iter().map(|row| row.product.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).map(|row| row.product.clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table
            .by_name
            .get(name)
            .and_then(|id| table.rows.get(id))
            .map(|row| row.product.clone()))
    }

    async fn replace(&self, id: Uuid, draft: &ProductDraft) -> AppResult<Option<Product>> {
        let mut guard = self.table.write().await;
        let table = &mut *guard;

        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        if row.product.name != draft.name {
            if table.by_name.contains_key(&draft.name) {
                return Err(AppError::validation(DUPLICATE_NAME_MESSAGE));
            }
            table.by_name.remove(&row.product.name);
            table.by_name.insert(draft.name.clone(), id);
        }

        row.product.apply_draft(draft, Utc::now());
        Ok(Some(row.product.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).map(|row| row.product);
        if let Some(product) = &removed {
            table.by_name.remove(&product.name);
        }
        Ok(removed)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn close(&self) {
        debug!("Memory store closed");
    }
}
