//! Property tests for ranking passes.

use proptest::prelude::*;

use alchm::domain::entities::{Candidate, CandidateKind, PlanetaryPosition, PositionSnapshot};
use alchm::domain::value_objects::{ElementalProfile, Planet, Sign};
use alchm::infrastructure::FixedEphemeris;
use alchm::{PillarCatalog, RankingOptions, RankingUseCase};

fn snapshot() -> impl Strategy<Value = PositionSnapshot> {
    prop::collection::btree_map(
        prop::sample::select(Planet::ALL.to_vec()),
        (prop::sample::select(Sign::ALL.to_vec()), any::<bool>()),
        0..=10,
    )
    .prop_map(|positions| {
        PositionSnapshot::from_positions(positions.into_iter().map(|(planet, (sign, retro))| {
            PlanetaryPosition::new(planet, sign).retrograde(retro)
        }))
    })
}

fn candidates() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(
        (
            prop::option::of([0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0]),
            prop::sample::select(vec!["roasting", "poaching", "curing", "levitating"]),
            any::<bool>(),
        ),
        0..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (profile, method, is_method))| {
                let mut candidate = if is_method {
                    let mut c = Candidate::new(format!("m{i:02}"), CandidateKind::Method);
                    c.method = Some(method.to_string());
                    c
                } else {
                    Candidate::new(format!("r{i:02}"), CandidateKind::Recipe)
                };
                if let Some([f, w, e, a]) = profile {
                    candidate = candidate.with_profile(ElementalProfile::new(f, w, e, a));
                }
                candidate
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: re-running a pass on the same inputs gives the same ranking.
    #[test]
    fn property_ranking_is_stable(snap in snapshot(), menu in candidates()) {
        let catalog = PillarCatalog::builtin().unwrap();
        let use_case = RankingUseCase::new(&catalog, FixedEphemeris::new(snap));
        let options = RankingOptions::new();

        let first = use_case.execute(&menu, &options);
        let second = use_case.execute(&menu, &options);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: input order never changes the output order.
    #[test]
    fn property_ranking_ignores_input_order(snap in snapshot(), menu in candidates()) {
        let catalog = PillarCatalog::builtin().unwrap();
        let use_case = RankingUseCase::new(&catalog, FixedEphemeris::new(snap));
        let options = RankingOptions::new();

        let mut reversed = menu.clone();
        reversed.reverse();

        let forward = use_case.execute(&menu, &options);
        let backward = use_case.execute(&reversed, &options);
        prop_assert_eq!(forward.names(), backward.names());
        prop_assert_eq!(forward.ranked.len(), menu.len());
    }

    /// PROPERTY: the moment profile is always a proportion.
    #[test]
    fn property_moment_profile_is_proportion(snap in snapshot()) {
        let catalog = PillarCatalog::builtin().unwrap();
        let use_case = RankingUseCase::new(&catalog, FixedEphemeris::new(snap));
        let result = use_case.execute(&[], &RankingOptions::new());
        prop_assert!(result.moment.elemental_profile.is_proportion());
    }
}
