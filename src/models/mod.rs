pub mod material;
pub mod product;

pub use material::{Material, MaterialDto};
pub use product::{Product, ProductDto, ProductUsage};
