//! Property tests for Kalchm and Monica.

use proptest::prelude::*;

use alchm::domain::services::{compute_kalchm, compute_monica};
use alchm::domain::value_objects::{EsmsEffects, MonicaValue};

fn effect() -> impl Strategy<Value = f64> {
    -1.0f64..=1.0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every valid effect set yields a strictly positive finite Kalchm.
    #[test]
    fn property_kalchm_is_positive(s in effect(), e in effect(), m in effect(), u in effect()) {
        let effects = EsmsEffects::new(s, e, m, u).unwrap();
        let k = compute_kalchm(&effects).unwrap();
        prop_assert!(k > 0.0);
        prop_assert!(k.is_finite());
    }

    /// PROPERTY: swapping the numerator and denominator axes inverts Kalchm.
    #[test]
    fn property_kalchm_inverts_on_swap(s in effect(), e in effect(), m in effect(), u in effect()) {
        let k = compute_kalchm(&EsmsEffects::new(s, e, m, u).unwrap()).unwrap();
        let inverse = compute_kalchm(&EsmsEffects::new(m, u, s, e).unwrap()).unwrap();
        prop_assert!((k * inverse - 1.0).abs() < 1e-9);
    }

    /// PROPERTY: Monica is defined and finite away from the degenerate inputs.
    #[test]
    fn property_monica_defined_off_degeneracy(
        greg in -2.0f64..2.0,
        reactivity in prop_oneof![-1.0f64..-0.01, 0.01f64..1.0],
        kalchm in prop_oneof![0.01f64..0.999, 1.001f64..100.0],
    ) {
        match compute_monica(greg, reactivity, kalchm) {
            MonicaValue::Defined(m) => prop_assert!(m.is_finite()),
            MonicaValue::Undefined => prop_assert!(false, "expected a defined value"),
        }
    }

    /// PROPERTY: Monica is undefined for zero reactivity, unit or non-positive Kalchm.
    #[test]
    fn property_monica_undefined_on_degeneracy(
        greg in -2.0f64..2.0,
        reactivity in -1.0f64..1.0,
        bad_kalchm in prop_oneof![Just(1.0f64), Just(0.0f64), -10.0f64..0.0],
    ) {
        prop_assert_eq!(compute_monica(greg, 0.0, 2.0), MonicaValue::Undefined);
        prop_assert_eq!(compute_monica(greg, reactivity, bad_kalchm), MonicaValue::Undefined);
    }
}
