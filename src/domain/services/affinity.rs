//! Elemental affinity mapping
//!
//! Turns position records into elemental weight vectors and folds the
//! per-planet vectors into the moment's aggregate profile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{PlanetaryPosition, PositionSnapshot};
use crate::domain::value_objects::{ElementalProfile, Planet, Sign};

/// Weight of the sign's element in a planet's vector
pub const SIGN_WEIGHT: f64 = 0.75;
/// Weight of the planet's own nature in its vector
pub const NATURE_WEIGHT: f64 = 0.25;

/// How per-planet vectors are combined into the moment's profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationMode {
    /// Plain average over every planet present
    #[default]
    Mean,
    /// Average weighted by log-scaled planetary mass
    MassWeighted,
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationMode::Mean => write!(f, "mean"),
            AggregationMode::MassWeighted => write!(f, "mass-weighted"),
        }
    }
}

impl FromStr for AggregationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "mean" => Ok(AggregationMode::Mean),
            "mass-weighted" | "mass" => Ok(AggregationMode::MassWeighted),
            other => Err(format!(
                "unknown aggregation mode '{other}' (expected mean or mass-weighted)"
            )),
        }
    }
}

/// Elemental vector for a planet in a sign; unknown sign is neutral.
pub fn affinity(planet: Planet, sign: Option<Sign>) -> ElementalProfile {
    match sign {
        Some(sign) => ElementalProfile::pure(sign.element())
            .scaled(SIGN_WEIGHT)
            .plus(&ElementalProfile::pure(planet.elemental_nature()).scaled(NATURE_WEIGHT)),
        None => ElementalProfile::neutral(),
    }
}

/// Elemental vector for a position record. Retrograde has no effect here.
pub fn position_affinity(position: &PlanetaryPosition) -> ElementalProfile {
    affinity(position.planet, position.sign)
}

/// Aggregate elemental profile of the moment, as a proportion.
///
/// An empty snapshot yields the neutral vector.
pub fn aggregate_profile(snapshot: &PositionSnapshot, mode: AggregationMode) -> ElementalProfile {
    if snapshot.is_empty() {
        return ElementalProfile::neutral();
    }

    let weighted = |weight: &dyn Fn(&PlanetaryPosition) -> f64| {
        snapshot.iter().fold(
            (ElementalProfile::zero(), 0.0),
            |(sum, total), position| {
                let w = weight(position);
                (sum.plus(&position_affinity(position).scaled(w)), total + w)
            },
        )
    };

    let (sum, total) = match mode {
        AggregationMode::Mean => weighted(&|_| 1.0),
        AggregationMode::MassWeighted => {
            let (sum, total) = weighted(&|p| p.planet.mass_weight());
            if total > 0.0 {
                (sum, total)
            } else {
                weighted(&|_| 1.0)
            }
        }
    };

    sum.scaled(1.0 / total).normalized()
}
