//! Full ranking passes reading positions from disk.

use std::fs;

use alchm::domain::services::FACTOR_PILLAR;
use alchm::domain::value_objects::{Planet, Season};
use alchm::infrastructure::JsonFileEphemeris;
use alchm::presentation::factory;
use alchm::{PillarCatalog, RankingFilters, RankingOptions, RankingUseCase};

use crate::common::{menu, solstice_snapshot};

const SOLSTICE_JSON: &str = r#"{
    "timestamp": "2024-06-20T20:51:00Z",
    "planetaryPositions": {
        "Sun":     { "sign": "cancer",      "degree": 0,  "minute": 51 },
        "Moon":    { "sign": "sagittarius", "degree": 20, "minute": 10 },
        "Mercury": { "sign": "cancer",      "degree": 13, "minute": 2 },
        "Venus":   { "sign": "cancer",      "degree": 8,  "minute": 30 },
        "Mars":    { "sign": "taurus",      "degree": 12, "minute": 5 },
        "Jupiter": { "sign": "gemini",      "degree": 6,  "minute": 50 },
        "Saturn":  { "sign": "pisces",      "degree": 19, "minute": 20 },
        "Uranus":  { "sign": "taurus",      "degree": 25, "minute": 40 },
        "Neptune": { "sign": "pisces",      "degree": 29, "minute": 50 },
        "Pluto":   { "sign": "aquarius",    "degree": 1,  "minute": 50, "isRetrograde": true }
    }
}"#;

#[test]
fn json_positions_match_the_in_memory_moment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("now.json");
    fs::write(&path, SOLSTICE_JSON).unwrap();

    let catalog = PillarCatalog::builtin().unwrap();
    let from_file = RankingUseCase::new(&catalog, JsonFileEphemeris::new(&path));
    let result = from_file.execute(&menu(), &RankingOptions::new());

    assert!(!result.ephemeris_fallback);
    assert_eq!(result.moment.planets_present, 10);
    assert_eq!(result.moment.season, Some(Season::Summer));
    // Thursday, fifteenth hour after sunrise
    assert_eq!(result.moment.hour_ruler, Some(Planet::Jupiter));
    assert!(result.moment.lunar_phase.is_some());

    let in_memory = factory::create_ranking_use_case(&catalog, &path)
        .rank_snapshot(&solstice_snapshot(), &menu(), &RankingOptions::new());
    assert_eq!(result.moment, in_memory.moment);
    assert_eq!(result.ranked, in_memory.ranked);
}

#[test]
fn watery_summer_moment_favours_the_cold_soup() {
    let catalog = PillarCatalog::builtin().unwrap();
    let use_case = RankingUseCase::new(
        &catalog,
        alchm::infrastructure::FixedEphemeris::new(solstice_snapshot()),
    );
    let result = use_case.execute(&menu(), &RankingOptions::new());

    let position = |name: &str| result.names().iter().position(|n| *n == name).unwrap();
    assert!(position("Chilled cucumber soup") < position("Beef chili"));
    assert!(position("Chilled cucumber soup") < position("Plain rice"));
}

#[test]
fn methods_and_recipes_rank_together() {
    let catalog = PillarCatalog::builtin().unwrap();
    let use_case = RankingUseCase::new(
        &catalog,
        alchm::infrastructure::FixedEphemeris::new(solstice_snapshot()),
    );
    let result = use_case.execute(&menu(), &RankingOptions::new());

    assert_eq!(result.ranked.len(), 6);
    for scored in &result.ranked {
        assert_eq!(scored.pillar.is_some(), scored.breakdown.contains_key(FACTOR_PILLAR));
    }
    let roasting = result.ranked.iter().find(|s| s.name == "Roasting").unwrap();
    assert_eq!(roasting.pillar.as_ref().unwrap().name, "Calcination");
}

#[test]
fn filters_and_limit_shape_the_result() {
    let catalog = PillarCatalog::builtin().unwrap();
    let use_case = RankingUseCase::new(
        &catalog,
        alchm::infrastructure::FixedEphemeris::new(solstice_snapshot()),
    );
    let options = RankingOptions::new()
        .with_filters(RankingFilters::default().require(["vegan"]))
        .with_limit(1);
    let result = use_case.execute(&menu(), &options);

    assert_eq!(result.ranked.len(), 1);
    assert_eq!(result.excluded.len(), 4);
    assert!(["Chilled cucumber soup", "Fermenting"].contains(&result.ranked[0].name.as_str()));
}

#[test]
fn ranking_output_serializes_camel_case() {
    let catalog = PillarCatalog::builtin().unwrap();
    let use_case = RankingUseCase::new(
        &catalog,
        alchm::infrastructure::FixedEphemeris::new(solstice_snapshot()),
    );
    let result = use_case.execute(&menu(), &RankingOptions::new());
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["moment"]["elementalProfile"]["Water"].is_number());
    assert_eq!(json["ephemerisFallback"], false);
    assert!(json["ranked"][0]["breakdown"]["elemental"].is_number());
}
