//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use stockroom_core::config::{DatabaseConfig, StoreProvider};
use stockroom_core::result::AppResult;
use stockroom_entity::{PRODUCT_SCHEMA, Product, ProductDraft};

use crate::connection::DatabasePool;
use crate::memory::MemoryProductStore;
use crate::repositories::ProductRepository;
use crate::store::ProductStore;

/// Owns the product store selected at startup.
///
/// Opening the store also applies the product storage schema, so a
/// `StoreManager` that exists is ready to serve.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn ProductStore>,
}

impl StoreManager {
    /// Open the store described by `config`.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn ProductStore> = match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL product store");
                let db = DatabasePool::open(config, &PRODUCT_SCHEMA).await?;
                Arc::new(ProductRepository::new(db))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory product store");
                Arc::new(MemoryProductStore::new())
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl ProductStore for StoreManager {
    async fn insert(&self, draft: &ProductDraft) -> AppResult<Product> {
        self.inner.insert(draft).await
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        self.inner.find_by_name(name).await
    }

    async fn replace(&self, id: Uuid, draft: &ProductDraft) -> AppResult<Option<Product>> {
        self.inner.replace(id, draft).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn close(&self) {
        self.inner.close().await
    }
}
