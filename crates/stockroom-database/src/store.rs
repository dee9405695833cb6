//! The product store abstraction.

use std::fmt::Debug;

use async_trait::async_trait;
use uuid::Uuid;

use stockroom_core::result::AppResult;
use stockroom_entity::{Product, ProductDraft};

/// Message used whenever the unique name constraint rejects a write.
pub const DUPLICATE_NAME_MESSAGE: &str = "Product with this name already exists";

/// Persistence for [`Product`] records.
///
/// Every method is a single atomic operation against the backing store.
/// Implementations enforce name uniqueness themselves and report a
/// violation as a validation error carrying [`DUPLICATE_NAME_MESSAGE`];
/// any other failure is a database error.
#[async_trait]
pub trait ProductStore: Debug + Send + Sync + 'static {
    /// Insert a new product. The store assigns `id` and both timestamps.
    async fn insert(&self, draft: &ProductDraft) -> AppResult<Product>;

    /// All products, newest `created_at` first.
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Find a product by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find a product by its exact (already trimmed) name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>>;

    /// Replace every mutable field of an existing product.
    ///
    /// Returns `None` when no product has this id.
    async fn replace(&self, id: Uuid, draft: &ProductDraft) -> AppResult<Option<Product>>;

    /// Delete a product, returning what was removed.
    async fn delete(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Release connections. Called once during shutdown.
    async fn close(&self);
}
