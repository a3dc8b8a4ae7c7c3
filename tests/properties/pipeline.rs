//! Property tests for the per-pillar pipeline.

use proptest::prelude::*;

use alchm::domain::entities::{AlchemicalPillar, ElementalAssociation};
use alchm::domain::value_objects::{Element, EsmsEffects};
use alchm::{enrich, PillarCatalog};

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::ALL.to_vec())
}

fn pillar() -> impl Strategy<Value = AlchemicalPillar> {
    (
        [-1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0],
        prop::option::of(element()),
        prop::option::of(element()),
    )
        .prop_map(|([s, e, m, u], primary, secondary)| AlchemicalPillar {
            id: 99,
            name: "Generated".to_string(),
            description: String::new(),
            effects: EsmsEffects::new(s, e, m, u).unwrap(),
            planetary_associations: Vec::new(),
            elemental_associations: ElementalAssociation::from_parts(primary, secondary),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: enriching the same pillar twice gives identical output.
    #[test]
    fn property_enrichment_is_deterministic(p in pillar()) {
        let first = enrich(&p).unwrap();
        let second = enrich(&p).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: thermodynamic components stay within the element table's range.
    #[test]
    fn property_thermodynamics_bounded(p in pillar()) {
        let t = enrich(&p).unwrap().thermodynamic_profile;
        for v in [t.heat, t.entropy, t.reactivity] {
            prop_assert!((0.1 - 1e-9..=1.0 + 1e-9).contains(&v));
        }
        prop_assert!((t.gregs_energy - (t.heat - t.entropy * t.reactivity)).abs() < 1e-12);
    }
}

#[test]
fn catalog_temperatures_stay_in_oven_range() {
    let catalog = PillarCatalog::builtin().unwrap();
    for entry in std::iter::once(catalog.default_entry()).chain(catalog.entries()) {
        let t = entry.enrichment.optimal_conditions.temperature_f;
        assert!((200..=500).contains(&t), "{} at {t}F", entry.pillar.name);
    }
}
