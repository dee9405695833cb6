//! Route definitions for the Stockroom HTTP API.
//!
//! Everything is mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{MethodRouter, get};

use stockroom_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Build the routed application, without cross-cutting layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(product_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .with_state(state)
}

/// Product CRUD. The collection answers with and without a trailing slash.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", collection_routes())
        .route("/products/", collection_routes())
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

fn collection_routes() -> MethodRouter<AppState> {
    get(handlers::product::list_products).post(handlers::product::create_product)
}

/// Liveness and store reachability
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

async fn route_not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
