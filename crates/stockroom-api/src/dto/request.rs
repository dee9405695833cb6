//! Request DTOs.

use serde::{Deserialize, Serialize};

use stockroom_core::error::AppError;
use stockroom_entity::{ProductInput, ProductUnit};

use super::number;

/// Message for a payload missing any required field.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// Message for a unit outside `kg`, `Bag`, `Pac`, `Lit`.
pub const INVALID_UNIT_MESSAGE: &str = "Invalid unit";

/// Create / update product request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Shop the product is stocked in.
    #[serde(default)]
    pub shopname: Option<String>,
    /// Quantity on hand.
    #[serde(default, deserialize_with = "number::deserialize")]
    pub quantity: Option<f64>,
    /// Cost price.
    #[serde(default, deserialize_with = "number::deserialize")]
    pub costprice: Option<f64>,
    /// Sent by older clients; never stored.
    #[serde(default, deserialize_with = "number::deserialize")]
    pub price_per_quantity: Option<f64>,
    /// Unit spelling.
    #[serde(default)]
    pub unit: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}

impl ProductRequest {
    /// Presence and unit checks, then conversion to a store candidate.
    pub fn into_input(self) -> Result<ProductInput, AppError> {
        if is_blank(&self.name)
            || is_blank(&self.shopname)
            || is_blank(&self.unit)
            || self.quantity.is_none()
            || self.costprice.is_none()
        {
            return Err(AppError::validation(MISSING_FIELDS_MESSAGE));
        }

        let unit = self
            .unit
            .as_deref()
            .map(str::parse::<ProductUnit>)
            .transpose()
            .map_err(|_| AppError::validation(INVALID_UNIT_MESSAGE))?;

        Ok(ProductInput {
            name: self.name,
            shopname: self.shopname,
            quantity: self.quantity,
            costprice: self.costprice,
            unit,
        })
    }
}
