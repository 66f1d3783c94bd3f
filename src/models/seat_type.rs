use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SeatType {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSeatType {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// One entry of a wholesale seat-type update: either a saved row keeping
/// its id or a new definition the store assigns a fresh id to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeatTypeUpsert {
    Saved(SeatType),
    New(NewSeatType),
}

impl From<SeatType> for SeatTypeUpsert {
    fn from(seat_type: SeatType) -> Self {
        SeatTypeUpsert::Saved(seat_type)
    }
}

impl From<NewSeatType> for SeatTypeUpsert {
    fn from(seat_type: NewSeatType) -> Self {
        SeatTypeUpsert::New(seat_type)
    }
}
