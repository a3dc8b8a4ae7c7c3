//! Kalchm equilibrium constant

use crate::domain::value_objects::EsmsEffects;
use crate::error::{EngineError, EngineResult};

/// Offset moving signed effects from [-1, 1] into [1, 3]
pub const EFFECT_SHIFT: f64 = 2.0;
/// Lower bound applied to shifted values before self-exponentiation
pub const SHIFT_FLOOR: f64 = 0.1;

fn self_power(x: f64) -> f64 {
    x.powf(x)
}

fn shifted(effect: f64) -> f64 {
    (effect + EFFECT_SHIFT).max(SHIFT_FLOOR)
}

/// `(S^S * E^E) / (M^M * U^U)` over shifted, floored effects.
///
/// Returns a domain error if the denominator collapses to zero or the result
/// is not a strictly positive finite number.
pub fn compute_kalchm(effects: &EsmsEffects) -> EngineResult<f64> {
    let spirit = self_power(shifted(effects.spirit));
    let essence = self_power(shifted(effects.essence));
    let matter = self_power(shifted(effects.matter));
    let substance = self_power(shifted(effects.substance));

    if matter == 0.0 || substance == 0.0 {
        return Err(EngineError::Domain {
            kalchm: f64::NAN,
            reason: "matter or substance term evaluated to zero".to_string(),
        });
    }

    let kalchm = (spirit * essence) / (matter * substance);
    if !kalchm.is_finite() || kalchm <= 0.0 {
        return Err(EngineError::Domain {
            kalchm,
            reason: "kalchm must be a positive finite number".to_string(),
        });
    }

    Ok(kalchm)
}
