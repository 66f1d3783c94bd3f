use serde::{Deserialize, Serialize};

// One (row, seat) coordinate inside a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPosition {
    pub row_id: i64,
    pub seat_id: i64,
}

// Occupancy delta pushed over the seats-update notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatsUpdate {
    pub occupied: Vec<SeatPosition>,
    pub released: Vec<SeatPosition>,
}

// Seats grouped by row, the unit the mock feed emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatsList {
    pub row: i64,
    pub seats: Vec<i64>,
}

// One mock feed tick: seats newly taken and seats released.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TakenSeats {
    pub taken: Vec<SeatsList>,
    pub released: Vec<SeatsList>,
}
