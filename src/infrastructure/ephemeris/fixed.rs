//! In-memory ephemeris source

use crate::domain::entities::PositionSnapshot;
use crate::domain::ports::{EphemerisResult, EphemerisSource};

/// Always answers with the same snapshot
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    snapshot: PositionSnapshot,
}

impl FixedEphemeris {
    pub fn new(snapshot: PositionSnapshot) -> Self {
        Self { snapshot }
    }

    /// A source with no planetary data at all
    pub fn empty() -> Self {
        Self::default()
    }
}

impl EphemerisSource for FixedEphemeris {
    fn snapshot(&self) -> EphemerisResult<PositionSnapshot> {
        Ok(self.snapshot.clone())
    }
}
