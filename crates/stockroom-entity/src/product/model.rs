//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::unit::ProductUnit;
use super::validation::ProductDraft;

/// A stored product.
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`) for the
/// admin front-end; the column names stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Unique, trimmed product name.
    pub name: String,
    /// Shop the product is stocked for.
    pub shopname: Option<String>,
    /// Quantity on hand, in `unit`.
    pub quantity: f64,
    /// Cost price per unit.
    pub costprice: f64,
    /// Unit the quantity is counted in.
    #[sqlx(try_from = "String")]
    pub unit: ProductUnit,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last written.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a record from a validated draft.
    ///
    /// Stores that assign ids and timestamps themselves (PostgreSQL) do not
    /// use this; the in-memory store does.
    pub fn from_draft(id: Uuid, draft: &ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            shopname: draft.shopname.clone(),
            quantity: draft.quantity,
            costprice: draft.costprice,
            unit: draft.unit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field with the draft's values.
    ///
    /// `id` and `created_at` are untouched; `updated_at` moves to `now`.
    pub fn apply_draft(&mut self, draft: &ProductDraft, now: DateTime<Utc>) {
        self.name = draft.name.clone();
        self.shopname = draft.shopname.clone();
        self.quantity = draft.quantity;
        self.costprice = draft.costprice;
        self.unit = draft.unit;
        self.updated_at = now;
    }
}
