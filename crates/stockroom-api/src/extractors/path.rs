//! Typed path parameter helpers.

use uuid::Uuid;

use stockroom_core::error::AppError;
use stockroom_service::product::service::NOT_FOUND_MESSAGE;

/// Parses a product id from a path segment.
///
/// A segment that is not a UUID cannot name a stored product, so it is
/// reported the same way as an unknown id.
pub fn parse_product_id(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))
}
