//! Product validation and normalization.
//!
//! [`ProductDraft::from_input`] is the single authority on what a storable
//! product looks like. The HTTP layer runs its own presence checks first,
//! but everything written to a store passes through here.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use stockroom_core::AppError;

use super::unit::ProductUnit;

/// Field order used to pick which failure to report first.
const FIELD_ORDER: [&str; 4] = ["name", "shopname", "quantity", "costprice"];

/// A rejected candidate, naming the field that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Offending field, as it appears in the JSON payload.
    pub field: &'static str,
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn from_errors(errors: &validator::ValidationErrors) -> Self {
        let fields = errors.field_errors();
        for field in FIELD_ORDER {
            if let Some(first) = fields.get(field).and_then(|list| list.first()) {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                return Self::new(field, message);
            }
        }
        Self::new("product", errors.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.message)
    }
}

/// Candidate product as received, before trimming and defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    /// Product name.
    pub name: Option<String>,
    /// Shop name.
    pub shopname: Option<String>,
    /// Quantity; defaults to 0.
    pub quantity: Option<f64>,
    /// Cost price.
    pub costprice: Option<f64>,
    /// Unit; defaults to kg.
    pub unit: Option<ProductUnit>,
}

/// A normalized, validated product ready to be written to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    /// Trimmed name.
    #[validate(length(
        max = 20,
        message = "Product name must be at most 20 characters long"
    ))]
    pub name: String,
    /// Trimmed shop name; blank input becomes `None`.
    #[validate(length(
        max = 20,
        message = "Shop name must be at most 20 characters long"
    ))]
    pub shopname: Option<String>,
    /// Quantity on hand.
    #[validate(range(min = 0.0, message = "Quantity must be greater than or equal to 0"))]
    pub quantity: f64,
    /// Cost price.
    #[validate(range(min = 0.0, message = "Cost price must be greater than or equal to 0"))]
    pub costprice: f64,
    /// Unit.
    pub unit: ProductUnit,
}

impl ProductDraft {
    /// Normalize and validate a candidate.
    ///
    /// Trims `name` and `shopname`, applies the `quantity` and `unit`
    /// defaults, then enforces lengths and non-negative numbers.
    pub fn from_input(input: ProductInput) -> Result<Self, ValidationError> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if name.is_empty() {
            return Err(ValidationError::new("name", "Product name is required"));
        }

        let costprice = input
            .costprice
            .ok_or_else(|| ValidationError::new("costprice", "Cost price is required"))?;

        let shopname = input
            .shopname
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let draft = Self {
            name,
            shopname,
            quantity: input.quantity.unwrap_or(0.0),
            costprice,
            unit: input.unit.unwrap_or_default(),
        };

        draft
            .validate()
            .map_err(|errors| ValidationError::from_errors(&errors))?;

        if !draft.quantity.is_finite() {
            return Err(ValidationError::new("quantity", "Quantity must be a finite number"));
        }
        if !draft.costprice.is_finite() {
            return Err(ValidationError::new("costprice", "Cost price must be a finite number"));
        }

        Ok(draft)
    }
}
