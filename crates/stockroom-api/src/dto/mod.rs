//! Request and response bodies.

pub mod number;
pub mod request;
pub mod response;

pub use request::ProductRequest;
pub use response::{HealthResponse, MessageResponse};
