use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::models::{SeatsList, TakenSeats};

/// Default spacing between feed ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(5);

const CHANNEL_CAPACITY: usize = 16;

// The canned occupancy deltas the feed cycles through.
pub fn canned_taken_seats() -> Vec<TakenSeats> {
    vec![
        TakenSeats {
            taken: vec![
                SeatsList { row: 1, seats: vec![1, 2, 3, 4] },
                SeatsList { row: 2, seats: vec![1, 2, 6, 7, 8] },
            ],
            released: vec![],
        },
        TakenSeats {
            taken: vec![
                SeatsList { row: 1, seats: vec![5, 6, 10, 11] },
                SeatsList { row: 2, seats: vec![10, 11, 12] },
                SeatsList { row: 2, seats: vec![16, 17, 18] },
            ],
            released: vec![],
        },
        TakenSeats {
            taken: vec![],
            released: vec![SeatsList { row: 1, seats: vec![1, 2, 3] }],
        },
        TakenSeats {
            taken: vec![SeatsList { row: 3, seats: vec![12, 13, 14, 15] }],
            released: vec![],
        },
    ]
}

// Aborts the ticker once the last feed handle is gone, so the timer task
// cannot outlive its subscribers.
struct TickerGuard(JoinHandle<()>);

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Simulated live feed of seat occupancy changes.
///
/// One canned [`TakenSeats`] value is published per tick. The tick counter
/// is shared by all handles and subscribers: a subscriber joining late
/// observes whatever value the current tick maps to, the sequence never
/// restarts.
#[derive(Clone)]
pub struct MockSeatFeed {
    tx: broadcast::Sender<TakenSeats>,
    ticks: Arc<AtomicU64>,
    values: Arc<Vec<TakenSeats>>,
    ticker: Arc<TickerGuard>,
}

impl MockSeatFeed {
    /// Spawn the ticker; the first value is published one full `period`
    /// after start.
    pub fn start(period: Duration) -> Self {
        let values = Arc::new(canned_taken_seats());
        let ticks = Arc::new(AtomicU64::new(0));
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        let task_tx = tx.clone();
        let task_values = values.clone();
        let task_ticks = ticks.clone();
        let ticker = tokio::task::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let tick = task_ticks.fetch_add(1, Ordering::Relaxed);
                let value = task_values[tick as usize % task_values.len()].clone();
                debug!(tick, "mock seat feed tick");
                // send only fails when nobody is subscribed
                let _ = task_tx.send(value);
            }
        });

        Self {
            tx,
            ticks,
            values,
            ticker: Arc::new(TickerGuard(ticker)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TakenSeats> {
        self.tx.subscribe()
    }

    /// The feed as a plain stream; a subscriber that lags behind the
    /// channel capacity skips ahead instead of erroring.
    pub fn stream(&self) -> impl Stream<Item = TakenSeats> {
        BroadcastStream::new(self.tx.subscribe()).filter_map(|item| item.ok())
    }

    /// Ticks published since the feed started (the shared clock).
    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// The value the feed publishes on a given tick.
    pub fn value_for_tick(&self, tick: u64) -> TakenSeats {
        self.values[tick as usize % self.values.len()].clone()
    }

    /// Stop the ticker. Already-subscribed receivers get no further
    /// values.
    pub fn shutdown(&self) {
        self.ticker.0.abort();
    }
}
