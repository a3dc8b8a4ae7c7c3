//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `ephemeris/` - Position sources (JSON file, fixed in-memory snapshot)
//! - `candidates` - Candidate documents (JSON)

pub mod candidates;
pub mod ephemeris;

// Re-export for convenience
pub use candidates::{load_candidates, parse_candidates};
pub use ephemeris::{parse_snapshot, FixedEphemeris, JsonFileEphemeris};
