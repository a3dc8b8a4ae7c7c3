//! Domain Entities
//!
//! - `AlchemicalPillar` - A named transformation archetype from the catalog
//! - `PositionSnapshot` - The moment: every known planetary position
//! - `Candidate` - A recipe, ingredient or cooking method to be ranked

mod candidate;
mod lenient;
mod pillar;
mod position;

pub use candidate::{AstrologicalInfluences, Candidate, CandidateKind};
pub use pillar::{AlchemicalPillar, ElementalAssociation, DEFAULT_PILLAR_ID};
pub use position::{PlanetaryPosition, PositionSnapshot, RawPosition};
