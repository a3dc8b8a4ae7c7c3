//! Ranking Use Case
//!
//! Orchestrates a ranking pass:
//! 1. Take one position snapshot from the ephemeris source
//! 2. Derive the moment context
//! 3. Drop candidates failing the hard filters
//! 4. Score the rest in parallel
//! 5. Sort with the deterministic comparator and apply the limit
//!
//! The snapshot is frozen once taken; nothing is refreshed mid-pass.

use rayon::prelude::*;

use crate::catalog::PillarCatalog;
use crate::domain::entities::{Candidate, PositionSnapshot};
use crate::domain::ports::EphemerisSource;
use crate::domain::services::{rank_order, score_candidate, MomentContext, ScoredCandidate};

use super::options::RankingOptions;
use super::result::RankingResult;

/// Ranking use case - scores candidates against the current moment
///
/// Parameterized by its ephemeris port; the catalog is shared by reference.
pub struct RankingUseCase<'a, E>
where
    E: EphemerisSource,
{
    catalog: &'a PillarCatalog,
    ephemeris: E,
}

impl<'a, E> RankingUseCase<'a, E>
where
    E: EphemerisSource,
{
    pub fn new(catalog: &'a PillarCatalog, ephemeris: E) -> Self {
        Self { catalog, ephemeris }
    }

    /// Execute a ranking pass against the ephemeris source's current snapshot.
    ///
    /// An ephemeris failure is logged and the pass continues with an empty
    /// snapshot, so a ranking is always produced.
    pub fn execute(&self, candidates: &[Candidate], options: &RankingOptions) -> RankingResult {
        let (snapshot, fallback) = match self.ephemeris.snapshot() {
            Ok(snapshot) => (snapshot, false),
            Err(e) => {
                tracing::warn!(error = %e, "ephemeris unavailable; ranking with neutral weighting");
                (PositionSnapshot::empty(), true)
            }
        };

        let mut result = self.rank_snapshot(&snapshot, candidates, options);
        result.ephemeris_fallback = fallback;
        result
    }

    /// Rank against an explicit snapshot
    pub fn rank_snapshot(
        &self,
        snapshot: &PositionSnapshot,
        candidates: &[Candidate],
        options: &RankingOptions,
    ) -> RankingResult {
        let moment = MomentContext::from_snapshot(
            snapshot,
            options.aggregation,
            &options.dignity,
            &options.overrides,
        );

        let (admitted, excluded): (Vec<&Candidate>, Vec<&Candidate>) = candidates
            .iter()
            .partition(|c| options.filters.admits(c));

        let catalog = self.catalog;
        let mut ranked: Vec<ScoredCandidate> = admitted
            .par_iter()
            .map(|candidate| {
                let pillar = candidate
                    .method_name()
                    .map(|method| catalog.resolve(method).as_match());
                score_candidate(candidate, pillar, &moment, &options.weights)
            })
            .collect();

        ranked.sort_by(rank_order);
        if let Some(limit) = options.limit {
            ranked.truncate(limit);
        }

        tracing::debug!(
            planets = snapshot.len(),
            scored = admitted.len(),
            excluded = excluded.len(),
            returned = ranked.len(),
            "ranking pass complete"
        );

        RankingResult {
            moment,
            ranked,
            excluded: excluded.iter().map(|c| c.name.clone()).collect(),
            ephemeris_fallback: false,
        }
    }
}
