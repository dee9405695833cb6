//! # stockroom-database
//!
//! The [`ProductStore`] abstraction and its implementations: PostgreSQL
//! through sqlx, and a process-local store for tests and local runs.
//! [`StoreManager`] opens whichever one the configuration selects.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryProductStore;
pub use provider::StoreManager;
pub use repositories::ProductRepository;
pub use store::ProductStore;
