pub mod room_config;
pub mod seat_type;
pub mod seats;

pub use room_config::{
    LayoutRow, NewRoomConfig, RoomConfig, RoomConfigUpsert, RoomLayout, RoomView,
};
pub use seat_type::{NewSeatType, SeatType, SeatTypeUpsert};
pub use seats::{SeatPosition, SeatsList, SeatsUpdate, TakenSeats};
