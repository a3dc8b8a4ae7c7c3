//! Planetary dignity
//!
//! Essential dignity of a planet in a sign, and its configurable strength.

use serde::{Deserialize, Serialize};

use crate::domain::entities::PlanetaryPosition;
use crate::domain::value_objects::{Planet, Sign};

/// Essential dignity of a planet in a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Domicile,
    Exaltation,
    Peregrine,
    Detriment,
    Fall,
}

impl std::fmt::Display for Dignity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Dignity::Domicile => "domicile",
            Dignity::Exaltation => "exaltation",
            Dignity::Peregrine => "peregrine",
            Dignity::Detriment => "detriment",
            Dignity::Fall => "fall",
        };
        write!(f, "{label}")
    }
}

/// Signs ruled by each planet, modern rulers included
const DOMICILES: [(Planet, &[Sign]); 10] = [
    (Planet::Sun, &[Sign::Leo]),
    (Planet::Moon, &[Sign::Cancer]),
    (Planet::Mercury, &[Sign::Gemini, Sign::Virgo]),
    (Planet::Venus, &[Sign::Taurus, Sign::Libra]),
    (Planet::Mars, &[Sign::Aries, Sign::Scorpio]),
    (Planet::Jupiter, &[Sign::Sagittarius, Sign::Pisces]),
    (Planet::Saturn, &[Sign::Capricorn, Sign::Aquarius]),
    (Planet::Uranus, &[Sign::Aquarius]),
    (Planet::Neptune, &[Sign::Pisces]),
    (Planet::Pluto, &[Sign::Scorpio]),
];

const EXALTATIONS: [(Planet, Sign); 10] = [
    (Planet::Sun, Sign::Aries),
    (Planet::Moon, Sign::Taurus),
    (Planet::Mercury, Sign::Virgo),
    (Planet::Venus, Sign::Pisces),
    (Planet::Mars, Sign::Capricorn),
    (Planet::Jupiter, Sign::Cancer),
    (Planet::Saturn, Sign::Libra),
    (Planet::Uranus, Sign::Scorpio),
    (Planet::Neptune, Sign::Cancer),
    (Planet::Pluto, Sign::Leo),
];

fn domiciles(planet: Planet) -> &'static [Sign] {
    DOMICILES
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, signs)| *signs)
        .unwrap_or(&[])
}

fn exaltation(planet: Planet) -> Option<Sign> {
    EXALTATIONS
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, sign)| *sign)
}

/// Dignity of `planet` in `sign`.
///
/// Detriment and fall are the signs opposite domicile and exaltation.
/// Where two apply, exaltation and fall take precedence.
pub fn dignity_of(planet: Planet, sign: Sign) -> Dignity {
    let exalted = exaltation(planet);
    if exalted == Some(sign) {
        return Dignity::Exaltation;
    }
    if exalted.map(|s| s.opposite()) == Some(sign) {
        return Dignity::Fall;
    }

    let ruled = domiciles(planet);
    if ruled.contains(&sign) {
        Dignity::Domicile
    } else if ruled.iter().any(|s| s.opposite() == sign) {
        Dignity::Detriment
    } else {
        Dignity::Peregrine
    }
}

/// Strength assigned to each dignity, plus the retrograde penalty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DignityWeights {
    pub domicile: f64,
    pub exaltation: f64,
    pub peregrine: f64,
    pub detriment: f64,
    pub fall: f64,
    pub retrograde_penalty: f64,
}

impl Default for DignityWeights {
    fn default() -> Self {
        Self {
            domicile: 1.0,
            exaltation: 0.75,
            peregrine: 0.0,
            detriment: -0.5,
            fall: -0.75,
            retrograde_penalty: 0.25,
        }
    }
}

impl DignityWeights {
    pub fn weight(&self, dignity: Dignity) -> f64 {
        match dignity {
            Dignity::Domicile => self.domicile,
            Dignity::Exaltation => self.exaltation,
            Dignity::Peregrine => self.peregrine,
            Dignity::Detriment => self.detriment,
            Dignity::Fall => self.fall,
        }
    }
}

/// Dignity strength of a position; zero when the sign is unknown.
pub fn dignity_strength(position: &PlanetaryPosition, weights: &DignityWeights) -> f64 {
    let Some(sign) = position.sign else {
        return 0.0;
    };
    let base = weights.weight(dignity_of(position.planet, sign));
    if position.is_retrograde {
        base - weights.retrograde_penalty
    } else {
        base
    }
}
