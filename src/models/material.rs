use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, Result};

/// A stocked raw-material type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Material {
    pub material_id: i64,
    pub material_type: String,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: f64,
    pub unit: String,
    pub package_quantity: i64,
    pub quantity: i64,
    pub min_quantity: i64,
}

impl Material {
    /// Whether the stock level has fallen below the reorder threshold.
    pub fn below_minimum(&self) -> bool {
        self.quantity < self.min_quantity
    }
}

/// Input record for creating or replacing a material. Every field except
/// the identity; validated as a unit before any storage call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDto {
    pub material_type: String,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: f64,
    pub unit: String,
    pub package_quantity: i64,
    pub quantity: i64,
    pub min_quantity: i64,
}

impl MaterialDto {
    /// Check every field constraint before the record touches storage.
    pub fn validate(&self) -> Result<()> {
        if self.material_type.trim().is_empty() {
            return Err(AppError::Validation {
                field: "material_type",
                reason: "must not be empty",
            });
        }
        if self.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name",
                reason: "must not be empty",
            });
        }
        if self.unit.trim().is_empty() {
            return Err(AppError::Validation {
                field: "unit",
                reason: "must not be empty",
            });
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(AppError::Validation {
                field: "unit_price",
                reason: "must not be negative",
            });
        }
        if self.package_quantity <= 0 {
            return Err(AppError::Validation {
                field: "package_quantity",
                reason: "must be a positive integer",
            });
        }
        if self.quantity < 0 {
            return Err(AppError::Validation {
                field: "quantity",
                reason: "must not be negative",
            });
        }
        if self.min_quantity < 0 {
            return Err(AppError::Validation {
                field: "min_quantity",
                reason: "must not be negative",
            });
        }

        Ok(())
    }
}
