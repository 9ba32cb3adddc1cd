use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    #[error("a record named '{0}' already exists")]
    DuplicateName(String),

    #[error("product {product_id} is already linked to material {material_id}")]
    DuplicateLink { product_id: i64, material_id: i64 },

    #[error("referenced product or material does not exist")]
    InvalidReference,

    #[error("quantity required must be positive, got {0}")]
    InvalidQuantity(i64),

    #[error("record {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
