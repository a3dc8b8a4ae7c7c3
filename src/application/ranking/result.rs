//! Ranking Result
//!
//! Result types for a ranking pass.

use serde::Serialize;

use crate::domain::services::{MomentContext, ScoredCandidate};

/// Result of a ranking pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    /// The moment every candidate was scored against
    pub moment: MomentContext,
    /// Admitted candidates, best first
    pub ranked: Vec<ScoredCandidate>,
    /// Names of candidates removed by the filters
    pub excluded: Vec<String>,
    /// True when the ephemeris failed and an empty snapshot was used
    pub ephemeris_fallback: bool,
}

impl RankingResult {
    pub fn names(&self) -> Vec<&str> {
        self.ranked.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn top(&self) -> Option<&ScoredCandidate> {
        self.ranked.first()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
