use tracing::info;
use tracing_subscriber::EnvFilter;

use warehouse_inventory::config::CONFIG;
use warehouse_inventory::{db, MaterialStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = db::init_db_pool(&CONFIG.database_url).await?;
    info!("warehouse database ready at {}", CONFIG.database_url);

    let materials = MaterialStore::new(pool.clone()).list_materials().await?;
    info!("{} materials tracked", materials.len());
    for material in &materials {
        if material.below_minimum() {
            info!(
                "'{}' is below its reorder threshold ({} < {})",
                material.name, material.quantity, material.min_quantity
            );
        }
    }

    pool.close().await;

    Ok(())
}
