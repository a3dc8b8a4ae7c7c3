//! Monica constant

use crate::domain::value_objects::MonicaValue;

/// `-gregs_energy / (reactivity * ln(kalchm))`, or `Undefined` when
/// kalchm is non-positive, reactivity is zero, or ln(kalchm) is zero.
pub fn compute_monica(gregs_energy: f64, reactivity: f64, kalchm: f64) -> MonicaValue {
    if kalchm <= 0.0 || reactivity == 0.0 {
        return MonicaValue::Undefined;
    }

    let ln_k = kalchm.ln();
    if ln_k == 0.0 {
        return MonicaValue::Undefined;
    }

    MonicaValue::from(Some(-gregs_energy / (reactivity * ln_k)))
}
