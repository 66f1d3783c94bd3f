use serde::Deserialize;
use std::env;

// Top-level configuration container for all settings
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub feed: FeedConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Local store settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

// Mock occupancy feed settings
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub tick_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seating_demo=debug".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://seating_demo.db".to_string()),
            },
            feed: FeedConfig {
                tick_seconds: env::var("FEED_TICK_SECONDS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("FEED_TICK_SECONDS must be a valid number"),
            },
        }
    }
}
