use futures::StreamExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seating_demo::{config::Config, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seating chart demo data service");

    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    info!("Local store ready");

    let seat_types = state
        .service
        .seat_types()
        .await
        .expect("Failed to load seat types");
    info!("{} seat types defined", seat_types.len());

    let rooms = state
        .service
        .room_configs()
        .await
        .expect("Failed to load room configs");
    info!("{} room configs stored", rooms.len());

    // Tail the mock occupancy feed the way a seat map component would.
    let mut feed = Box::pin(state.service.feed().stream());
    while let Some(update) = feed.next().await {
        info!(
            taken = update.taken.len(),
            released = update.released.len(),
            "seat occupancy changed"
        );
    }
}
