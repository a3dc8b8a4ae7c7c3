//! Planetary positions and the moment snapshot

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::domain::value_objects::{Planet, Sign};

/// Position record exactly as the ephemeris collaborator delivers it.
///
/// Every field is optional so partial records still load; extra attributes
/// (speed, display strings) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    #[serde(default, deserialize_with = "lenient::text")]
    pub sign: Option<String>,
    #[serde(default, alias = "degree", deserialize_with = "lenient::number")]
    pub degree_in_sign: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub minute: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_retrograde: bool,
    #[serde(default, deserialize_with = "lenient::number")]
    pub exact_longitude: Option<f64>,
}

/// A planet's typed position.
///
/// `sign` is `None` when the record carried neither a recognised sign nor a
/// usable longitude; such planets weigh in with the neutral elemental vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryPosition {
    pub planet: Planet,
    pub sign: Option<Sign>,
    pub degree_in_sign: u8,
    pub minute: u8,
    pub is_retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_longitude: Option<f64>,
}

impl PlanetaryPosition {
    /// Position with a known sign at 0°00'
    pub fn new(planet: Planet, sign: Sign) -> Self {
        Self {
            planet,
            sign: Some(sign),
            degree_in_sign: 0,
            minute: 0,
            is_retrograde: false,
            exact_longitude: None,
        }
    }

    pub fn retrograde(mut self, is_retrograde: bool) -> Self {
        self.is_retrograde = is_retrograde;
        self
    }

    pub fn at(mut self, degree: u8, minute: u8) -> Self {
        self.degree_in_sign = degree.min(29);
        self.minute = minute.min(59);
        self
    }

    /// Convert a raw record, deriving what the record leaves out.
    ///
    /// Unrecognised sign names fall back to the longitude; degree and
    /// minute are clamped to 0-29 / 0-59.
    pub fn from_raw(planet: Planet, raw: &RawPosition) -> Self {
        let longitude = raw.exact_longitude.filter(|l| l.is_finite());
        let sign = raw
            .sign
            .as_deref()
            .and_then(|s| s.parse::<Sign>().ok())
            .or_else(|| longitude.and_then(Sign::from_longitude));

        let within_sign = longitude.map(|l| l.rem_euclid(360.0) % 30.0);
        let degree = raw
            .degree_in_sign
            .filter(|d| d.is_finite())
            .or_else(|| within_sign.map(f64::floor))
            .unwrap_or(0.0);
        let minute = raw
            .minute
            .filter(|m| m.is_finite())
            .or_else(|| within_sign.map(|w| ((w - w.floor()) * 60.0).floor()))
            .unwrap_or(0.0);

        Self {
            planet,
            sign,
            degree_in_sign: degree.clamp(0.0, 29.0) as u8,
            minute: minute.clamp(0.0, 59.0) as u8,
            is_retrograde: raw.is_retrograde,
            exact_longitude: longitude,
        }
    }
}

/// Snapshot of all known planetary positions at one moment.
///
/// Frozen for the duration of a ranking pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub positions: BTreeMap<Planet, PlanetaryPosition>,
}

impl PositionSnapshot {
    /// Snapshot with no planets and no timestamp
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_positions(positions: impl IntoIterator<Item = PlanetaryPosition>) -> Self {
        Self {
            timestamp: None,
            positions: positions.into_iter().map(|p| (p.planet, p)).collect(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn get(&self, planet: Planet) -> Option<&PlanetaryPosition> {
        self.positions.get(&planet)
    }

    /// Sign of a planet, if present and known
    pub fn sign_of(&self, planet: Planet) -> Option<Sign> {
        self.get(planet).and_then(|p| p.sign)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetaryPosition> {
        self.positions.values()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
