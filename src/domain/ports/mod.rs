//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod ephemeris;

pub use ephemeris::{EphemerisError, EphemerisResult, EphemerisSource};
