use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, Result};

/// A finished good assembled from materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Input record for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub description: Option<String>,
}

impl ProductDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name",
                reason: "must not be empty",
            });
        }

        Ok(())
    }
}

/// One row of the "which products consume this material" join: the product
/// plus how many units of the material one unit of it requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductUsage {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub quantity_required: i64,
}
