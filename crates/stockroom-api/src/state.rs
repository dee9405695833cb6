//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use stockroom_core::config::AppConfig;
use stockroom_database::ProductStore;
use stockroom_service::ProductService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The product store, for health checks.
    pub store: Arc<dyn ProductStore>,
    /// Product use cases.
    pub product_service: Arc<ProductService>,
    /// When the process started serving.
    pub started_at: Instant,
}

impl AppState {
    /// Build state around an opened store.
    pub fn new(config: AppConfig, store: Arc<dyn ProductStore>) -> Self {
        let product_service = Arc::new(ProductService::new(Arc::clone(&store)));
        Self {
            config: Arc::new(config),
            store,
            product_service,
            started_at: Instant::now(),
        }
    }
}
