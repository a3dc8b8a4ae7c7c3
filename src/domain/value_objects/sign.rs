//! Zodiac sign value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Element, ParseNameError, Planet};

/// Tropical zodiac sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All signs in zodiacal order, starting at 0° Aries
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Lowercase identifier used on the wire
    pub fn key(&self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    /// Position in zodiacal order (Aries = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Sign opposite on the wheel
    pub fn opposite(&self) -> Sign {
        Sign::ALL[(self.index() + 6) % 12]
    }

    /// Triplicity element
    pub fn element(&self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Traditional (pre-modern) ruler
    pub fn traditional_ruler(&self) -> Planet {
        match self {
            Sign::Aries | Sign::Scorpio => Planet::Mars,
            Sign::Taurus | Sign::Libra => Planet::Venus,
            Sign::Gemini | Sign::Virgo => Planet::Mercury,
            Sign::Cancer => Planet::Moon,
            Sign::Leo => Planet::Sun,
            Sign::Sagittarius | Sign::Pisces => Planet::Jupiter,
            Sign::Capricorn | Sign::Aquarius => Planet::Saturn,
        }
    }

    /// Sign containing an ecliptic longitude in degrees.
    ///
    /// Returns `None` for non-finite input.
    pub fn from_longitude(longitude: f64) -> Option<Sign> {
        if !longitude.is_finite() {
            return None;
        }
        let normalized = longitude.rem_euclid(360.0);
        let index = ((normalized / 30.0).floor() as usize).min(11);
        Some(Sign::ALL[index])
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Sign {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sign::ALL
            .into_iter()
            .find(|sign| sign.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError::new("sign", s))
    }
}

impl Serialize for Sign {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Sign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
