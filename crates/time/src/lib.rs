//! Time-of-day value object and accessor-style aggregates.
//!
//! Types here are public, so their state is reachable only through accessors.
//! Plain-field structs are confined to private modules.

pub mod point;
pub mod time;

pub use point::Point;
pub use time::{HOURS_PER_DAY, MINUTES_PER_HOUR, Time};
