//! Stock unit enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use stockroom_core::AppError;

/// The unit a product's quantity is counted in.
///
/// Spellings are case-sensitive and match what the admin front-end sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductUnit {
    /// Kilograms.
    #[default]
    #[serde(rename = "kg")]
    Kg,
    /// Bags.
    #[serde(rename = "Bag")]
    Bag,
    /// Packets.
    #[serde(rename = "Pac")]
    Pac,
    /// Litres.
    #[serde(rename = "Lit")]
    Lit,
}

impl ProductUnit {
    /// Every accepted unit, in display order.
    pub const ALL: [ProductUnit; 4] = [Self::Kg, Self::Bag, Self::Pac, Self::Lit];

    /// Return the unit as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Bag => "Bag",
            Self::Pac => "Pac",
            Self::Lit => "Lit",
        }
    }
}

impl fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Self::Kg),
            "Bag" => Ok(Self::Bag),
            "Pac" => Ok(Self::Pac),
            "Lit" => Ok(Self::Lit),
            _ => Err(AppError::validation(format!(
                "Invalid unit: '{s}'. Expected one of: kg, Bag, Pac, Lit"
            ))),
        }
    }
}

impl TryFrom<String> for ProductUnit {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
