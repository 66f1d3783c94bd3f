pub mod config;
pub mod database;
pub mod feed;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
    pub service: services::DataService,
}

impl AppState {
    pub async fn new(config: config::Config) -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let db = database::Database::connect(&config.database.url).await?;

        db.run_migrations().await?;

        let feed = feed::MockSeatFeed::start(Duration::from_secs(config.feed.tick_seconds));
        let service = services::DataService::new(db.clone(), feed);

        Ok(Arc::new(Self {
            db,
            config,
            service,
        }))
    }
}
