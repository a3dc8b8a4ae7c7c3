//! Thermodynamic profile of a pillar and Greg's Energy

use serde::Serialize;

use crate::domain::entities::{AlchemicalPillar, ElementalAssociation};
use crate::domain::value_objects::Element;

/// Weight of the primary element when a secondary is present
pub const PRIMARY_WEIGHT: f64 = 0.7;
/// Weight of the secondary element
pub const SECONDARY_WEIGHT: f64 = 0.3;

/// Base (heat, entropy, reactivity) of an element
pub fn element_triple(element: Element) -> (f64, f64, f64) {
    match element {
        Element::Fire => (1.0, 0.7, 0.8),
        Element::Air => (0.3, 0.9, 0.7),
        Element::Water => (0.1, 0.4, 0.6),
        Element::Earth => (0.2, 0.1, 0.2),
    }
}

/// Heat, entropy and reactivity of a pillar plus the derived Greg's Energy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermodynamicProfile {
    pub heat: f64,
    pub entropy: f64,
    pub reactivity: f64,
    pub gregs_energy: f64,
}

impl ThermodynamicProfile {
    pub fn new(heat: f64, entropy: f64, reactivity: f64) -> Self {
        Self {
            heat,
            entropy,
            reactivity,
            gregs_energy: gregs_energy(heat, entropy, reactivity),
        }
    }

    pub fn of_element(element: Element) -> Self {
        let (heat, entropy, reactivity) = element_triple(element);
        Self::new(heat, entropy, reactivity)
    }
}

/// Net thermodynamic favourability: `heat - entropy * reactivity`
pub fn gregs_energy(heat: f64, entropy: f64, reactivity: f64) -> f64 {
    heat - entropy * reactivity
}

/// Thermodynamics of a pillar from its elemental association.
///
/// A neutral association takes the average of the four element triples.
pub fn compute_thermodynamics(pillar: &AlchemicalPillar) -> ThermodynamicProfile {
    match pillar.elemental_associations {
        ElementalAssociation::Pure(element) => ThermodynamicProfile::of_element(element),
        ElementalAssociation::Blend { primary, secondary } => {
            let (ph, pe, pr) = element_triple(primary);
            let (sh, se, sr) = element_triple(secondary);
            ThermodynamicProfile::new(
                PRIMARY_WEIGHT * ph + SECONDARY_WEIGHT * sh,
                PRIMARY_WEIGHT * pe + SECONDARY_WEIGHT * se,
                PRIMARY_WEIGHT * pr + SECONDARY_WEIGHT * sr,
            )
        }
        ElementalAssociation::Neutral => {
            let n = Element::ALL.len() as f64;
            let (heat, entropy, reactivity) = Element::ALL.iter().fold(
                (0.0, 0.0, 0.0),
                |(h, e, r), element| {
                    let (eh, ee, er) = element_triple(*element);
                    (h + eh, e + ee, r + er)
                },
            );
            ThermodynamicProfile::new(heat / n, entropy / n, reactivity / n)
        }
    }
}
