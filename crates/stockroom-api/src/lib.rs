//! # stockroom-api
//!
//! HTTP API layer for Stockroom built on Axum.
//!
//! Provides the product REST endpoints under `/api/products`, a health
//! endpoint, CORS and request-logging middleware, request DTOs, and the
//! mapping from `AppError` to JSON error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
