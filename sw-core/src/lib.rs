pub mod day_key;
pub mod events;
pub mod music;
pub mod station;
pub mod weather;

pub use day_key::DayKey;
pub use station::{Station, StationKey};
