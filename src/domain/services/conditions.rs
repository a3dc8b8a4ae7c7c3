//! Optimal cooking conditions for a pillar

use serde::Serialize;

use super::classification::{round_half_up, TEMPERATURE_PER_MONICA};
use super::thermodynamics::ThermodynamicProfile;
use crate::domain::value_objects::{LunarPhase, LunarPhaseSet, MonicaValue, Planet};

/// Baseline oven temperature, °F
pub const BASE_TEMPERATURE_F: f64 = 350.0;
/// Degrees Fahrenheit per unit of heat above 0.5
pub const HEAT_TEMPERATURE_COEFFICIENT: f64 = 50.0;
/// Lowest recommended oven temperature, °F
pub const MIN_TEMPERATURE_F: i32 = 200;
/// Highest recommended oven temperature, °F
pub const MAX_TEMPERATURE_F: i32 = 500;
/// Thermodynamic threshold above which a planetary hour is favoured
pub const HOUR_THRESHOLD: f64 = 0.6;

/// Coarse cooking-time bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingBucket {
    Quick,
    Steady,
    Medium,
    Slow,
}

impl std::fmt::Display for TimingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TimingBucket::Quick => "quick",
            TimingBucket::Steady => "steady",
            TimingBucket::Medium => "medium",
            TimingBucket::Slow => "slow",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalConditions {
    pub temperature_f: i32,
    pub timing_bucket: TimingBucket,
    pub planetary_hours: Vec<Planet>,
    pub lunar_phases: LunarPhaseSet,
}

pub fn recommended_temperature(monica: MonicaValue, thermo: &ThermodynamicProfile) -> i32 {
    let monica_adjustment = monica.value().map_or(0.0, |m| m * TEMPERATURE_PER_MONICA);
    let thermo_adjustment = (thermo.heat - 0.5) * HEAT_TEMPERATURE_COEFFICIENT;
    round_half_up(BASE_TEMPERATURE_F + monica_adjustment + thermo_adjustment)
        .clamp(MIN_TEMPERATURE_F, MAX_TEMPERATURE_F)
}

/// First matching rule wins; undefined Monica stays `Medium`.
pub fn timing_bucket(monica: MonicaValue, thermo: &ThermodynamicProfile) -> TimingBucket {
    match monica {
        MonicaValue::Defined(m) if m > 0.5 && thermo.entropy < 0.4 => TimingBucket::Quick,
        MonicaValue::Defined(m) if m < -0.5 && thermo.entropy > 0.6 => TimingBucket::Slow,
        MonicaValue::Defined(m) if m.abs() < 0.2 => TimingBucket::Steady,
        _ => TimingBucket::Medium,
    }
}

/// Heat, then reactivity, then entropy; Jupiter when none qualifies.
pub fn planetary_hours(thermo: &ThermodynamicProfile) -> Vec<Planet> {
    let mut hours = Vec::new();
    if thermo.heat > HOUR_THRESHOLD {
        hours.extend([Planet::Sun, Planet::Mars]);
    }
    if thermo.reactivity > HOUR_THRESHOLD {
        hours.extend([Planet::Mercury, Planet::Uranus]);
    }
    if thermo.entropy > HOUR_THRESHOLD {
        hours.extend([Planet::Neptune, Planet::Pluto]);
    }
    if hours.is_empty() {
        hours.push(Planet::Jupiter);
    }
    hours
}

pub fn lunar_phases(monica: MonicaValue) -> LunarPhaseSet {
    match monica {
        MonicaValue::Undefined => LunarPhaseSet::All,
        MonicaValue::Defined(m) if m > 0.5 => {
            LunarPhaseSet::Only(vec![LunarPhase::WaxingGibbous, LunarPhase::FullMoon])
        }
        MonicaValue::Defined(m) if m < -0.5 => {
            LunarPhaseSet::Only(vec![LunarPhase::WaningCrescent, LunarPhase::NewMoon])
        }
        MonicaValue::Defined(_) => {
            LunarPhaseSet::Only(vec![LunarPhase::FirstQuarter, LunarPhase::ThirdQuarter])
        }
    }
}

pub fn synthesize(monica: MonicaValue, thermo: &ThermodynamicProfile) -> OptimalConditions {
    OptimalConditions {
        temperature_f: recommended_temperature(monica, thermo),
        timing_bucket: timing_bucket(monica, thermo),
        planetary_hours: planetary_hours(thermo),
        lunar_phases: lunar_phases(monica),
    }
}
