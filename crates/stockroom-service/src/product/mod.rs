//! Product use cases.

pub mod service;

pub use service::ProductService;
