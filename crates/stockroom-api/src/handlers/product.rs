//! Product CRUD handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use stockroom_entity::Product;

use crate::dto::{MessageResponse, ProductRequest};
use crate::error::{ApiError, json_rejection};
use crate::extractors::parse_product_id;
use crate::state::AppState;

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(req) = payload.map_err(json_rejection)?;
    let product = state.product_service.create(req.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.product_service.list().await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    let product = state.product_service.get(id).await?;
    Ok(Json(product))
}

/// PUT /api/products/{id}
///
/// An unknown id is reported before anything about the body.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    state.product_service.ensure_exists(id).await?;

    let Json(req) = payload.map_err(json_rejection)?;
    let product = state.product_service.update(id, req.into_input()?).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_product_id(&id)?;
    state.product_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
