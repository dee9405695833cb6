//! # stockroom-service
//!
//! Business logic service layer for Stockroom. Services receive their
//! store at construction time as an `Arc<dyn ProductStore>`, so the same
//! code runs against PostgreSQL in production and the in-memory store in
//! tests.

pub mod product;

pub use product::ProductService;
