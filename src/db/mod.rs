use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use std::time::Duration;

pub mod material_store;
pub mod product_store;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str) -> Result<DbPool> {
    // Foreign keys are off by default in SQLite; the cascade rules on
    // product_materials depend on them being enforced on every connection.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await?;

    // Run migrations
    setup_database(&pool).await?;

    Ok(pool)
}

/// Set up the database schema
async fn setup_database(pool: &DbPool) -> Result<()> {
    // Create materials table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS materials (
            material_id INTEGER PRIMARY KEY AUTOINCREMENT,
            material_type TEXT NOT NULL,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            unit_price REAL NOT NULL CHECK (unit_price >= 0),
            unit TEXT NOT NULL,
            package_quantity INTEGER NOT NULL CHECK (package_quantity > 0),
            quantity INTEGER NOT NULL CHECK (quantity >= 0),
            min_quantity INTEGER NOT NULL CHECK (min_quantity >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create products table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            product_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create the product/material link table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product_materials (
            product_id INTEGER NOT NULL,
            material_id INTEGER NOT NULL,
            quantity_required INTEGER NOT NULL CHECK (quantity_required > 0),
            PRIMARY KEY (product_id, material_id),
            FOREIGN KEY (product_id) REFERENCES products (product_id) ON DELETE CASCADE,
            FOREIGN KEY (material_id) REFERENCES materials (material_id) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
