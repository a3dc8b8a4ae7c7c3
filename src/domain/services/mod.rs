//! Domain Services
//!
//! Pure calculators that turn pillars and position snapshots into
//! thermodynamic metrics, classifications and scores.
//! These services have no I/O dependencies and are easily testable.

pub mod affinity;
pub mod celestial;
pub mod classification;
pub mod conditions;
pub mod dignity;
pub mod enrichment;
pub mod kalchm;
pub mod monica;
pub mod scorer;
pub mod thermodynamics;

pub use affinity::{affinity, aggregate_profile, position_affinity, AggregationMode};
pub use celestial::{illumination, lunar_phase_at, phase_position, planetary_hour_ruler};
pub use classification::{
    classify, derive_modifiers, IntensityModifier, MonicaModifiers, PillarClassification,
};
pub use conditions::{synthesize, OptimalConditions, TimingBucket};
pub use dignity::{dignity_of, dignity_strength, Dignity, DignityWeights};
pub use enrichment::{enrich, PillarEnrichment};
pub use kalchm::compute_kalchm;
pub use monica::compute_monica;
pub use scorer::{
    rank_order, score_candidate, FACTOR_BASE, FACTOR_ELEMENTAL, FACTOR_HOUR, FACTOR_LUNAR,
    FACTOR_PILLAR, FACTOR_PLANETARY, FACTOR_SEASONAL, FACTOR_ZODIAC, MomentContext, MomentOverrides, PillarMatch, ScoredCandidate,
    ScoringWeights, ZodiacBody,
};
pub use thermodynamics::{compute_thermodynamics, gregs_energy, ThermodynamicProfile};
