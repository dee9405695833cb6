//! Store implementations backed by PostgreSQL.

pub mod product;

pub use product::ProductRepository;
