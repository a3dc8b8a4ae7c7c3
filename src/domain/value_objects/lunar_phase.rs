//! Lunar phase tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ParseNameError;

/// One of the eight conventional lunar phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl LunarPhase {
    pub const ALL: [LunarPhase; 8] = [
        LunarPhase::NewMoon,
        LunarPhase::WaxingCrescent,
        LunarPhase::FirstQuarter,
        LunarPhase::WaxingGibbous,
        LunarPhase::FullMoon,
        LunarPhase::WaningGibbous,
        LunarPhase::ThirdQuarter,
        LunarPhase::WaningCrescent,
    ];

    /// Snake-case tag used on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            LunarPhase::NewMoon => "new_moon",
            LunarPhase::WaxingCrescent => "waxing_crescent",
            LunarPhase::FirstQuarter => "first_quarter",
            LunarPhase::WaxingGibbous => "waxing_gibbous",
            LunarPhase::FullMoon => "full_moon",
            LunarPhase::WaningGibbous => "waning_gibbous",
            LunarPhase::ThirdQuarter => "third_quarter",
            LunarPhase::WaningCrescent => "waning_crescent",
        }
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for LunarPhase {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        if wanted == "last_quarter" {
            return Ok(LunarPhase::ThirdQuarter);
        }
        LunarPhase::ALL
            .into_iter()
            .find(|phase| phase.tag() == wanted)
            .ok_or_else(|| ParseNameError::new("lunar phase", s))
    }
}

impl Serialize for LunarPhase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for LunarPhase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered set of lunar phases a preparation is suited to.
///
/// `All` serializes as `["all"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LunarPhaseSet {
    All,
    Only(Vec<LunarPhase>),
}

impl LunarPhaseSet {
    /// Membership test; `All` matches every phase
    pub fn contains(&self, phase: LunarPhase) -> bool {
        match self {
            LunarPhaseSet::All => true,
            LunarPhaseSet::Only(phases) => phases.contains(&phase),
        }
    }

    /// Wire tags in order
    pub fn tags(&self) -> Vec<&'static str> {
        match self {
            LunarPhaseSet::All => vec!["all"],
            LunarPhaseSet::Only(phases) => phases.iter().map(|p| p.tag()).collect(),
        }
    }
}

impl Serialize for LunarPhaseSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tags().serialize(serializer)
    }
}
