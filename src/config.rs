use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn init() -> Self {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://warehouse.db".to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::init);
