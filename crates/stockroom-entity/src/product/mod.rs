//! Product domain entities.

pub mod model;
pub mod unit;
pub mod validation;

pub use model::Product;
pub use unit::ProductUnit;
pub use validation::{ProductDraft, ProductInput, ValidationError};
