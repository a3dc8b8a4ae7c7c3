//! Calendar-derived attributes of a moment: lunar phase and planetary hour

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc, Weekday};

use crate::domain::value_objects::{LunarPhase, Planet};

/// Mean synodic month in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.53058867;
/// Nominal sunrise hour (UTC) used to start the planetary day
pub const NOMINAL_SUNRISE_HOUR: u32 = 6;

/// A known new moon: 2023-01-21 20:53 UTC
fn reference_new_moon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 21, 20, 53, 0)
        .single()
        .unwrap_or_default()
}

/// Position in the synodic cycle, in [0, 1)
pub fn phase_position(at: DateTime<Utc>) -> f64 {
    let elapsed = at.signed_duration_since(reference_new_moon());
    let days = elapsed.num_seconds() as f64 / 86_400.0;
    (days / SYNODIC_MONTH_DAYS).rem_euclid(1.0)
}

/// Illuminated fraction of the lunar disc
pub fn illumination(position: f64) -> f64 {
    0.5 * (1.0 - (2.0 * std::f64::consts::PI * position).cos())
}

pub fn phase_at_position(p: f64) -> LunarPhase {
    if !(0.03..=0.97).contains(&p) {
        LunarPhase::NewMoon
    } else if p > 0.22 && p < 0.28 {
        LunarPhase::FirstQuarter
    } else if p > 0.47 && p < 0.53 {
        LunarPhase::FullMoon
    } else if p > 0.72 && p < 0.78 {
        LunarPhase::ThirdQuarter
    } else if p < 0.25 {
        LunarPhase::WaxingCrescent
    } else if p < 0.5 {
        LunarPhase::WaxingGibbous
    } else if p < 0.75 {
        LunarPhase::WaningGibbous
    } else {
        LunarPhase::WaningCrescent
    }
}

pub fn lunar_phase_at(at: DateTime<Utc>) -> LunarPhase {
    phase_at_position(phase_position(at))
}

fn day_ruler(weekday: Weekday) -> Planet {
    match weekday {
        Weekday::Sun => Planet::Sun,
        Weekday::Mon => Planet::Moon,
        Weekday::Tue => Planet::Mars,
        Weekday::Wed => Planet::Mercury,
        Weekday::Thu => Planet::Jupiter,
        Weekday::Fri => Planet::Venus,
        Weekday::Sat => Planet::Saturn,
    }
}

/// Ruler of the planetary hour containing `at`.
///
/// The day's ruler takes the first hour after sunrise and each later hour
/// steps through the Chaldean order. Hours before sunrise belong to the
/// previous day.
pub fn planetary_hour_ruler(at: DateTime<Utc>) -> Planet {
    let sunrise_day = if at.hour() < NOMINAL_SUNRISE_HOUR {
        at - Duration::days(1)
    } else {
        at
    };
    let hours_since_sunrise = (at.hour() + 24 - NOMINAL_SUNRISE_HOUR) % 24;

    let ruler = day_ruler(sunrise_day.weekday());
    let start = Planet::CHALDEAN
        .iter()
        .position(|p| *p == ruler)
        .unwrap_or_default();
    Planet::CHALDEAN[(start + hours_since_sunrise as usize) % Planet::CHALDEAN.len()]
}
