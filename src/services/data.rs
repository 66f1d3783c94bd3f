use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::database::Database;
use crate::feed::MockSeatFeed;
use crate::models::{
    RoomConfig, RoomConfigUpsert, RoomView, SeatType, SeatTypeUpsert, SeatsUpdate, TakenSeats,
};
use crate::store::{RoomConfigStore, SeatTypeStore};

/// The data access surface the UI talks to: room configs and seat types
/// in the local store, the mock occupancy feed, and the seats-update
/// notification channel.
///
/// Store errors propagate to the caller as-is; no operation retries or
/// remaps them.
#[derive(Clone)]
pub struct DataService {
    room_configs: RoomConfigStore,
    seat_types: SeatTypeStore,
    feed: MockSeatFeed,
    seats_update_tx: Arc<watch::Sender<Option<SeatsUpdate>>>,
}

impl DataService {
    pub fn new(db: Database, feed: MockSeatFeed) -> Self {
        let (seats_update_tx, _) = watch::channel(None);
        Self {
            room_configs: RoomConfigStore::new(db.clone()),
            seat_types: SeatTypeStore::new(db),
            feed,
            seats_update_tx: Arc::new(seats_update_tx),
        }
    }

    // === Room configs ===

    /// Save a config: a new one gets a store-assigned id, a saved one is
    /// overwritten in place. Returns the saved record either way.
    pub async fn save_room_config(
        &self,
        config: impl Into<RoomConfigUpsert>,
    ) -> Result<RoomConfig, sqlx::Error> {
        match config.into() {
            RoomConfigUpsert::New(config) => self.room_configs.insert(config).await,
            RoomConfigUpsert::Saved(config) => {
                self.room_configs.put(&config).await?;
                Ok(config)
            }
        }
    }

    /// Alias kept for the room form, which saves under this name.
    pub async fn save_room(
        &self,
        config: impl Into<RoomConfigUpsert>,
    ) -> Result<RoomConfig, sqlx::Error> {
        self.save_room_config(config).await
    }

    /// `None` and `0` are not ids; both resolve to `Ok(None)` without
    /// touching the store.
    pub async fn room_config(&self, id: Option<i64>) -> Result<Option<RoomConfig>, sqlx::Error> {
        match id {
            Some(id) if id != 0 => self.room_configs.get(id).await,
            _ => Ok(None),
        }
    }

    /// A config in render-ready shape: the stored layout when one exists,
    /// otherwise `row_count` rows of `avg_seats_in_row` unassigned seats.
    pub async fn room(&self, id: Option<i64>) -> Result<Option<RoomView>, sqlx::Error> {
        Ok(self.room_config(id).await?.map(RoomView::from))
    }

    pub async fn room_configs(&self) -> Result<Vec<RoomConfig>, sqlx::Error> {
        self.room_configs.all().await
    }

    // === Seat types ===

    pub async fn seat_types(&self) -> Result<Vec<SeatType>, sqlx::Error> {
        self.seat_types.all().await
    }

    /// Wholesale replace of the seat-type table, in one transaction.
    pub async fn update_seat_types(&self, types: Vec<SeatTypeUpsert>) -> Result<(), sqlx::Error> {
        self.seat_types.replace_all(types).await
    }

    // === Occupancy ===

    /// Occupancy tracking is not wired to any backing state yet; every
    /// seat reports occupied.
    pub async fn is_seat_occupied(&self, _room_id: i64, _row_id: i64, _seat_id: i64) -> bool {
        true
    }

    // === Channels ===

    /// Subscribe to the mock occupancy feed.
    pub fn taken_seats(&self) -> broadcast::Receiver<TakenSeats> {
        self.feed.subscribe()
    }

    pub fn feed(&self) -> &MockSeatFeed {
        &self.feed
    }

    /// Latest occupancy delta, `None` until something publishes. No
    /// producer in this crate does; the channel is an extension point for
    /// a future live backend.
    pub fn seats_updates(&self) -> watch::Receiver<Option<SeatsUpdate>> {
        self.seats_update_tx.subscribe()
    }

    /// Push a delta to every seats-update subscriber.
    pub fn publish_seats_update(&self, update: SeatsUpdate) {
        self.seats_update_tx.send_replace(Some(update));
    }
}
