use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::material::{Material, MaterialDto},
};

/// Material store for database operations
pub struct MaterialStore {
    pool: DbPool,
}

impl MaterialStore {
    /// Create a new MaterialStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a list of all materials, ordered by id
    pub async fn list_materials(&self) -> Result<Vec<Material>> {
        let materials =
            sqlx::query_as::<_, Material>("SELECT * FROM materials ORDER BY material_id")
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(materials)
    }

    /// Get a material by ID
    pub async fn get_material(&self, id: i64) -> Result<Material> {
        let material =
            sqlx::query_as::<_, Material>("SELECT * FROM materials WHERE material_id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?
                .ok_or(AppError::NotFound(id))?;

        Ok(material)
    }

    /// Create a new material
    pub async fn add_material(&self, material: MaterialDto) -> Result<Material> {
        material.validate()?;

        let result = sqlx::query(
            r#"
            INSERT INTO materials
                (material_type, name, description, unit_price, unit,
                 package_quantity, quantity, min_quantity)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&material.material_type)
        .bind(&material.name)
        .bind(&material.description)
        .bind(material.unit_price)
        .bind(&material.unit)
        .bind(material.package_quantity)
        .bind(material.quantity)
        .bind(material.min_quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| name_conflict(e, &material.name))?;

        let id = result.last_insert_rowid();
        tracing::info!(material_id = id, name = %material.name, "material added");

        self.get_material(id).await
    }

    /// Replace every field of an existing material
    pub async fn update_material(&self, id: i64, material: MaterialDto) -> Result<Material> {
        material.validate()?;

        let result = sqlx::query(
            r#"
            UPDATE materials
            SET material_type = ?, name = ?, description = ?, unit_price = ?,
                unit = ?, package_quantity = ?, quantity = ?, min_quantity = ?
            WHERE material_id = ?
            "#,
        )
        .bind(&material.material_type)
        .bind(&material.name)
        .bind(&material.description)
        .bind(material.unit_price)
        .bind(&material.unit)
        .bind(material.package_quantity)
        .bind(material.quantity)
        .bind(material.min_quantity)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| name_conflict(e, &material.name))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }

        tracing::info!(material_id = id, "material updated");

        self.get_material(id).await
    }

    /// Delete a material by ID, cascading removal of its product links
    pub async fn delete_material(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM materials WHERE material_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }

        tracing::info!(material_id = id, "material deleted");

        Ok(())
    }
}

/// Map a unique-constraint rejection from the storage layer onto the name
/// that caused it; everything else stays a database error.
fn name_conflict(err: sqlx::Error, name: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::DuplicateName(name.to_string())
        }
        _ => AppError::Database(err),
    }
}
