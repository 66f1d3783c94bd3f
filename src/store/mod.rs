pub mod room_configs;
pub mod seat_types;

pub use room_configs::RoomConfigStore;
pub use seat_types::SeatTypeStore;
