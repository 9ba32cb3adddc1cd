use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::product::{Product, ProductDto, ProductUsage},
};

/// Product and BOM-link store for database operations
pub struct ProductStore {
    pool: DbPool,
}

impl ProductStore {
    /// Create a new ProductStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new product
    pub async fn add_product(&self, product: ProductDto) -> Result<Product> {
        product.validate()?;

        let result = sqlx::query("INSERT INTO products (name, description) VALUES (?, ?)")
            .bind(&product.name)
            .bind(&product.description)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::DuplicateName(product.name.clone())
                }
                _ => AppError::Database(e),
            })?;

        let id = result.last_insert_rowid();
        tracing::info!(product_id = id, name = %product.name, "product added");

        Ok(Product {
            product_id: id,
            name: product.name,
            description: product.description,
        })
    }

    /// Link a material to a product with the quantity one unit consumes
    pub async fn add_product_material(
        &self,
        product_id: i64,
        material_id: i64,
        quantity_required: i64,
    ) -> Result<()> {
        if quantity_required <= 0 {
            return Err(AppError::InvalidQuantity(quantity_required));
        }

        sqlx::query(
            r#"
            INSERT INTO product_materials (product_id, material_id, quantity_required)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(product_id)
        .bind(material_id)
        .bind(quantity_required)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateLink {
                product_id,
                material_id,
            },
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::InvalidReference
            }
            _ => AppError::Database(e),
        })?;

        tracing::info!(product_id, material_id, quantity_required, "BOM link added");

        Ok(())
    }

    /// List every product consuming the given material, with the required
    /// quantity per unit. Empty when the material is unused or unknown;
    /// callers that need to tell those apart check the material first.
    pub async fn list_products_using_material(
        &self,
        material_id: i64,
    ) -> Result<Vec<ProductUsage>> {
        let usages = sqlx::query_as::<_, ProductUsage>(
            r#"
            SELECT p.product_id, p.name, p.description, pm.quantity_required
            FROM products p
            JOIN product_materials pm ON p.product_id = pm.product_id
            WHERE pm.material_id = ?
            ORDER BY p.product_id
            "#,
        )
        .bind(material_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(usages)
    }

    /// Delete a product by ID, cascading removal of its material links
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }

        tracing::info!(product_id = id, "product deleted");

        Ok(())
    }
}
