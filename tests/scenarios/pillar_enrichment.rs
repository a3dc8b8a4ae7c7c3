//! Pillar enrichment scenarios.

use alchm::domain::services::{
    compute_kalchm, compute_thermodynamics, IntensityModifier, PillarClassification, TimingBucket,
};
use alchm::domain::value_objects::{LunarPhaseSet, MonicaValue, Planet};
use alchm::PillarCatalog;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn calcination_thermodynamics_blend_fire_and_earth() {
    let catalog = PillarCatalog::builtin().unwrap();
    let entry = catalog.resolve("calcination");
    let thermo = compute_thermodynamics(&entry.pillar);

    assert!(close(thermo.heat, 0.76));
    assert!(close(thermo.entropy, 0.52));
    assert!(close(thermo.reactivity, 0.62));
    assert!(close(thermo.gregs_energy, 0.76 - 0.52 * 0.62));
    assert!((thermo.gregs_energy - 0.44).abs() < 0.01);
}

#[test]
fn calcination_sits_exactly_at_equilibrium() {
    // Shifted effects {1, 3, 3, 1}: (1 * 27) / (27 * 1)
    let catalog = PillarCatalog::builtin().unwrap();
    let entry = catalog.resolve("roasting");

    assert_eq!(compute_kalchm(&entry.pillar.effects).unwrap(), 1.0);

    let e = &entry.enrichment;
    assert_eq!(e.monica_constant, MonicaValue::Undefined);
    assert_eq!(e.monica_classification, PillarClassification::MatterDominant);
    assert_eq!(e.monica_modifiers.intensity_modifier, IntensityModifier::Maintain);
    assert_eq!(e.optimal_conditions.temperature_f, 363);
    assert_eq!(e.optimal_conditions.timing_bucket, TimingBucket::Medium);
    assert_eq!(e.optimal_conditions.lunar_phases, LunarPhaseSet::All);
    assert_eq!(
        e.optimal_conditions.planetary_hours,
        vec![Planet::Sun, Planet::Mars, Planet::Mercury, Planet::Uranus]
    );
}

#[test]
fn unknown_method_resolves_to_neutral_pillar() {
    let catalog = PillarCatalog::builtin().unwrap();
    let entry = catalog.resolve("underwater-sous-vide-plasma");

    assert_eq!(entry.pillar.id, 0);
    assert!(entry.pillar.is_default());
    assert_eq!(entry.enrichment.kalchm, 1.0);
    assert_eq!(entry.enrichment.monica_constant, MonicaValue::Undefined);
    assert_eq!(entry.enrichment.optimal_conditions.temperature_f, 345);
}

#[test]
fn every_method_resolves_to_its_own_pillar() {
    let catalog = PillarCatalog::builtin().unwrap();
    for entry in catalog.entries() {
        for method in &entry.methods {
            assert_eq!(catalog.resolve(method).pillar.id, entry.pillar.id, "{method}");
        }
        let upper = entry.pillar.name.to_uppercase();
        assert_eq!(catalog.resolve(&upper).pillar.id, entry.pillar.id);
    }
}

#[test]
fn defined_monica_values_carry_their_sign_into_modifiers() {
    let catalog = PillarCatalog::builtin().unwrap();
    for entry in catalog.entries() {
        let e = &entry.enrichment;
        if let Some(m) = e.monica_constant.value() {
            assert!(m.is_finite());
            let temp = e.monica_modifiers.temperature_adjustment_f;
            if m > 0.1 {
                assert!(temp >= 0, "{}", e.name);
            } else if m < -0.1 {
                assert!(temp <= 0, "{}", e.name);
            }
        }
    }
}
