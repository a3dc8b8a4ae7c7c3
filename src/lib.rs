//! alchm - alchemical thermodynamics and recommendation scoring
//!
//! Maps cooking methods onto fourteen alchemical pillars, derives a
//! thermodynamic profile, Kalchm equilibrium and Monica constant for each,
//! and ranks recipes, ingredients and methods against the elemental and
//! astrological state of a moment.

pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{RankingFilters, RankingOptions, RankingResult, RankingUseCase};
pub use catalog::{CatalogEntry, PillarCatalog};
pub use config::{ConfigWarning, EngineConfig};
pub use domain::entities::{Candidate, CandidateKind, PlanetaryPosition, PositionSnapshot};
pub use domain::services::{enrich, MomentContext, PillarEnrichment, ScoredCandidate};
pub use error::{EngineError, EngineResult};
