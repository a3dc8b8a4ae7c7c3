//! Shared fixtures for scenario and property tests.

#![allow(dead_code)]

use alchm::domain::entities::{
    AstrologicalInfluences, Candidate, CandidateKind, PlanetaryPosition, PositionSnapshot,
};
use alchm::domain::value_objects::{Element, ElementalProfile, Planet, Season, Sign};
use chrono::{TimeZone, Utc};

/// A full ten-planet snapshot for the 2024 June solstice
pub fn solstice_snapshot() -> PositionSnapshot {
    PositionSnapshot::from_positions([
        PlanetaryPosition::new(Planet::Sun, Sign::Cancer).at(0, 51),
        PlanetaryPosition::new(Planet::Moon, Sign::Sagittarius).at(20, 10),
        PlanetaryPosition::new(Planet::Mercury, Sign::Cancer).at(13, 2),
        PlanetaryPosition::new(Planet::Venus, Sign::Cancer).at(8, 30),
        PlanetaryPosition::new(Planet::Mars, Sign::Taurus).at(12, 5),
        PlanetaryPosition::new(Planet::Jupiter, Sign::Gemini).at(6, 50),
        PlanetaryPosition::new(Planet::Saturn, Sign::Pisces).at(19, 20),
        PlanetaryPosition::new(Planet::Uranus, Sign::Taurus).at(25, 40),
        PlanetaryPosition::new(Planet::Neptune, Sign::Pisces).at(29, 50),
        PlanetaryPosition::new(Planet::Pluto, Sign::Aquarius)
            .at(1, 50)
            .retrograde(true),
    ])
    .with_timestamp(Utc.with_ymd_and_hms(2024, 6, 20, 20, 51, 0).unwrap())
}

/// A mixed menu of recipes and methods
pub fn menu() -> Vec<Candidate> {
    vec![
        Candidate::new("Chilled cucumber soup", CandidateKind::Recipe)
            .with_profile(ElementalProfile::new(0.0, 0.7, 0.2, 0.1))
            .with_influences(AstrologicalInfluences {
                favorable_zodiac: [Sign::Cancer].into(),
                seasonal_preference: [Season::Summer].into(),
                ..Default::default()
            })
            .with_tags(["vegan"]),
        Candidate::new("Beef chili", CandidateKind::Recipe)
            .with_profile(ElementalProfile::pure(Element::Fire))
            .with_influences(AstrologicalInfluences {
                dominant_planets: [Planet::Mars].into(),
                unfavorable_zodiac: [Sign::Cancer].into(),
                ..Default::default()
            }),
        Candidate::new("Plain rice", CandidateKind::Ingredient),
        Candidate::new("Roasting", CandidateKind::Method),
        Candidate::new("Poaching", CandidateKind::Method),
        Candidate::new("Fermenting", CandidateKind::Method).with_tags(["vegan"]),
    ]
}
