//! Domain Value Objects
//!
//! Closed enums and small typed records. Every name that crosses the
//! boundary (planets, signs, elements, seasons, lunar phases) is parsed
//! into one of these, and unknown names are rejected here rather than
//! carried around as strings.

mod element;
mod esms;
mod lunar_phase;
mod monica;
mod planet;
mod season;
mod sign;
mod tag;

pub use element::{Element, ElementalProfile, PROPORTION_EPSILON};
pub use esms::EsmsEffects;
pub use lunar_phase::{LunarPhase, LunarPhaseSet};
pub use monica::MonicaValue;
pub use planet::Planet;
pub use season::{sun_sign_for_date, Season};
pub use sign::Sign;
pub use tag::{normalize_key, Tag};

/// A name that does not match any member of a closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseNameError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
