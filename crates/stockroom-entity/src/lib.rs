//! # stockroom-entity
//!
//! Domain entity models for Stockroom. The crate holds the single
//! `Product` record, the pure validation that turns a candidate payload
//! into a normalized draft, and the storage-schema declaration handed to
//! the store at startup.
//!
//! Validation here has no store dependency so it can be unit-tested alone.

pub mod product;
pub mod schema;

pub use product::{Product, ProductDraft, ProductInput, ProductUnit, ValidationError};
pub use schema::{CollectionSchema, ColumnSpec, IndexSpec, PRODUCT_SCHEMA};
