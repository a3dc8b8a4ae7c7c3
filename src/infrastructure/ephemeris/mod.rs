//! Ephemeris adapters

mod fixed;
mod json;

pub use fixed::FixedEphemeris;
pub use json::{parse_snapshot, JsonFileEphemeris};
