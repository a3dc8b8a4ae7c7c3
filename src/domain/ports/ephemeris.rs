//! EphemerisSource port - the external provider of planetary positions
//!
//! The engine never computes positions itself. A ranking pass asks the
//! source once for a snapshot and treats it as frozen from then on.

use crate::domain::entities::PositionSnapshot;

/// Result type for ephemeris lookups
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Ephemeris lookup errors
#[derive(Debug, thiserror::Error)]
pub enum EphemerisError {
    /// The source could not be reached or produced nothing
    #[error("ephemeris source unavailable: {0}")]
    Unavailable(String),
    /// The source answered with something that is not a position document
    #[error("malformed ephemeris data: {0}")]
    Malformed(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract provider of the current moment's planetary positions
pub trait EphemerisSource {
    /// Snapshot of the positions at the moment of the call
    fn snapshot(&self) -> EphemerisResult<PositionSnapshot>;
}
