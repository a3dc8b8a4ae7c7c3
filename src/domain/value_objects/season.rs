//! Season value object

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::{ParseNameError, Sign};

/// Northern-hemisphere season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn key(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Season the Sun is in while transiting `sign`
    pub fn of_sun_sign(sign: Sign) -> Season {
        match sign {
            Sign::Aries | Sign::Taurus | Sign::Gemini => Season::Spring,
            Sign::Cancer | Sign::Leo | Sign::Virgo => Season::Summer,
            Sign::Libra | Sign::Scorpio | Sign::Sagittarius => Season::Autumn,
            Sign::Capricorn | Sign::Aquarius | Sign::Pisces => Season::Winter,
        }
    }

    /// Season for a calendar date, via the conventional sun-sign date table
    pub fn of_date(date: NaiveDate) -> Season {
        Season::of_sun_sign(sun_sign_for_date(date))
    }
}

/// Conventional tropical sun sign for a calendar date
pub fn sun_sign_for_date(date: NaiveDate) -> Sign {
    let (month, day) = (date.month(), date.day());
    // (month, first day of the sign starting in that month, sign starting then)
    const CUSPS: [(u32, u32, Sign); 12] = [
        (1, 20, Sign::Aquarius),
        (2, 19, Sign::Pisces),
        (3, 21, Sign::Aries),
        (4, 20, Sign::Taurus),
        (5, 21, Sign::Gemini),
        (6, 21, Sign::Cancer),
        (7, 23, Sign::Leo),
        (8, 23, Sign::Virgo),
        (9, 23, Sign::Libra),
        (10, 23, Sign::Scorpio),
        (11, 22, Sign::Sagittarius),
        (12, 22, Sign::Capricorn),
    ];

    let (_, cusp_day, starting) = CUSPS[(month - 1) as usize];
    if day >= cusp_day {
        starting
    } else {
        // Still in the sign that started the previous month.
        let previous = (month as usize + 10) % 12;
        CUSPS[previous].2
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Season {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(ParseNameError::new("season", s)),
        }
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
