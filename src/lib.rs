pub mod config;
pub mod db;
pub mod error;
pub mod models;


pub use db::material_store::MaterialStore;
pub use db::product_store::ProductStore;
pub use db::{init_db_pool, DbPool};
pub use error::{AppError, Result};
