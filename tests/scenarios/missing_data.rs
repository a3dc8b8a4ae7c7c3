//! Missing and malformed input scenarios.

use alchm::domain::entities::{Candidate, CandidateKind};
use alchm::domain::services::{FACTOR_ELEMENTAL, FACTOR_LUNAR, FACTOR_SEASONAL};
use alchm::domain::value_objects::ElementalProfile;
use alchm::infrastructure::{parse_candidates, parse_snapshot, FixedEphemeris};
use alchm::{PillarCatalog, RankingOptions, RankingUseCase};

use crate::common::menu;

#[test]
fn empty_snapshot_still_ranks_everyone_neutrally() {
    let catalog = PillarCatalog::builtin().unwrap();
    let use_case = RankingUseCase::new(&catalog, FixedEphemeris::empty());
    let candidates = menu();

    let result = use_case.execute(&candidates, &RankingOptions::new());

    assert_eq!(result.ranked.len(), candidates.len());
    assert_eq!(result.moment.elemental_profile, ElementalProfile::neutral());
    assert_eq!(result.moment.season, None);
    for scored in &result.ranked {
        assert!((scored.breakdown[FACTOR_ELEMENTAL] - 0.25).abs() < 1e-9);
        assert_eq!(scored.breakdown[FACTOR_SEASONAL], 0.0);
        if let Some(lunar) = scored.breakdown.get(FACTOR_LUNAR) {
            assert_eq!(*lunar, 0.0);
        }
    }
}

#[test]
fn planets_without_signs_weigh_neutrally() {
    let snapshot = parse_snapshot(
        r#"{ "Sun": { "isRetrograde": false }, "Vulcan": { "sign": "leo" }, "Moon": "bogus" }"#,
    )
    .unwrap();
    assert_eq!(snapshot.len(), 1);

    let catalog = PillarCatalog::builtin().unwrap();
    let use_case = RankingUseCase::new(&catalog, FixedEphemeris::new(snapshot));
    let result = use_case.execute(
        &[Candidate::new("Toast", CandidateKind::Recipe)],
        &RankingOptions::new(),
    );
    assert_eq!(result.moment.elemental_profile, ElementalProfile::neutral());
    assert!(result.moment.zodiac_bodies.is_empty());
}

#[test]
fn malformed_candidate_metadata_degrades_to_no_bonus() {
    let candidates = parse_candidates(
        r#"[{
            "name": "Mystery stew",
            "elementalProfile": "hot",
            "astrologicalInfluences": {
                "favorableZodiac": ["leo", "ophiuchus"],
                "dominantPlanets": 7,
                "seasonalPreference": "monsoon"
            }
        }]"#,
    )
    .unwrap();
    assert_eq!(candidates.len(), 1);
    let stew = &candidates[0];
    assert!(stew.elemental_profile.is_none());
    assert_eq!(stew.astrological_influences.favorable_zodiac.len(), 1);
    assert!(stew.astrological_influences.dominant_planets.is_empty());
    assert!(stew.astrological_influences.seasonal_preference.is_empty());

    let catalog = PillarCatalog::builtin().unwrap();
    let use_case = RankingUseCase::new(&catalog, FixedEphemeris::empty());
    let result = use_case.execute(&candidates, &RankingOptions::new());
    assert!((result.ranked[0].score - 0.25).abs() < 1e-9);
}
