//! Planet value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Element, ParseNameError};

/// A body tracked by the ephemeris collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

// NASA planetary fact sheets, kilograms.
const MASS_KG_PLUTO: f64 = 1.309e22;
const MASS_KG_SUN: f64 = 1.989e30;

impl Planet {
    /// All planets, in canonical order
    pub const ALL: [Planet; 10] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Classical planets in Chaldean order (slowest to fastest)
    pub const CHALDEAN: [Planet; 7] = [
        Planet::Saturn,
        Planet::Jupiter,
        Planet::Mars,
        Planet::Sun,
        Planet::Venus,
        Planet::Mercury,
        Planet::Moon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    /// Intrinsic elemental nature of the planet
    pub fn elemental_nature(&self) -> Element {
        match self {
            Planet::Sun | Planet::Mars | Planet::Jupiter => Element::Fire,
            Planet::Moon | Planet::Neptune | Planet::Pluto => Element::Water,
            Planet::Mercury | Planet::Uranus => Element::Air,
            Planet::Venus | Planet::Saturn => Element::Earth,
        }
    }

    /// Mass in kilograms
    pub fn mass_kg(&self) -> f64 {
        match self {
            Planet::Sun => MASS_KG_SUN,
            Planet::Moon => 7.342e22,
            Planet::Mercury => 3.285e23,
            Planet::Venus => 4.867e24,
            Planet::Mars => 6.390e23,
            Planet::Jupiter => 1.898e27,
            Planet::Saturn => 5.683e26,
            Planet::Uranus => 8.681e25,
            Planet::Neptune => 1.024e26,
            Planet::Pluto => MASS_KG_PLUTO,
        }
    }

    /// Log-scaled mass in [0, 1]: Pluto maps to 0.0, the Sun to 1.0.
    pub fn mass_weight(&self) -> f64 {
        (self.mass_kg() / MASS_KG_PLUTO).log10() / (MASS_KG_SUN / MASS_KG_PLUTO).log10()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Planet {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Planet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError::new("planet", s))
    }
}

impl<'de> Deserialize<'de> for Planet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
