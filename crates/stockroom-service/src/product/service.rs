//! Product CRUD orchestration.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stockroom_core::error::AppError;
use stockroom_core::result::AppResult;
use stockroom_database::store::{DUPLICATE_NAME_MESSAGE, ProductStore};
use stockroom_entity::{Product, ProductDraft, ProductInput};

/// Message returned whenever an id does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// Create, list, fetch, replace, and delete products.
///
/// Input is normalized through [`ProductDraft::from_input`] before any
/// store call. The name pre-check here gives a clean error in the common
/// case; the store's unique index settles races.
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Creates a product.
    pub async fn create(&self, input: ProductInput) -> AppResult<Product> {
        let draft = ProductDraft::from_input(input)?;

        if self.store.find_by_name(&draft.name).await?.is_some() {
            return Err(AppError::validation(DUPLICATE_NAME_MESSAGE));
        }

        let product = self.store.insert(&draft).await?;
        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Lists every product, newest first.
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.store.find_all().await
    }

    /// Gets a single product.
    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Fails with not-found unless the product exists.
    pub async fn ensure_exists(&self, id: Uuid) -> AppResult<()> {
        self.get(id).await.map(|_| ())
    }

    /// Replaces every mutable field of a product.
    pub async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Product> {
        let draft = ProductDraft::from_input(input)?;

        if let Some(holder) = self.store.find_by_name(&draft.name).await? {
            if holder.id != id {
                return Err(AppError::validation(DUPLICATE_NAME_MESSAGE));
            }
        }

        let product = self
            .store
            .replace(id, &draft)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, id: Uuid) -> AppResult<Product> {
        let product = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        info!(product_id = %product.id, "Product deleted");
        Ok(product)
    }
}
