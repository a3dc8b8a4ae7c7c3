//! ESMS effects: the four signed alchemical axes

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Directional influence of a pillar on Spirit, Essence, Matter and Substance.
///
/// Each axis lies in [-1, 1]. The axes are independent and need not sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EsmsEffects {
    #[serde(default)]
    pub spirit: f64,
    #[serde(default)]
    pub essence: f64,
    #[serde(default)]
    pub matter: f64,
    #[serde(default)]
    pub substance: f64,
}

impl Default for EsmsEffects {
    fn default() -> Self {
        Self::neutral()
    }
}

impl EsmsEffects {
    /// Build validated effects
    pub fn new(spirit: f64, essence: f64, matter: f64, substance: f64) -> EngineResult<Self> {
        let effects = Self {
            spirit,
            essence,
            matter,
            substance,
        };
        effects.validate()?;
        Ok(effects)
    }

    /// All-zero effects
    pub fn neutral() -> Self {
        Self {
            spirit: 0.0,
            essence: 0.0,
            matter: 0.0,
            substance: 0.0,
        }
    }

    /// Axis name / value pairs in canonical order
    pub fn axes(&self) -> [(&'static str, f64); 4] {
        [
            ("spirit", self.spirit),
            ("essence", self.essence),
            ("matter", self.matter),
            ("substance", self.substance),
        ]
    }

    /// Reject non-finite values and values outside [-1, 1]
    pub fn validate(&self) -> EngineResult<()> {
        for (axis, value) in self.axes() {
            if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidEffect { axis, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_bounds() {
        assert!(EsmsEffects::new(-1.0, 1.0, 1.0, -1.0).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range() {
        let err = EsmsEffects::new(0.0, 1.2, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidEffect {
                axis: "essence",
                ..
            }
        ));
    }

    #[test]
    fn new_rejects_nan() {
        assert!(EsmsEffects::new(0.0, 0.0, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn toml_parse_fills_missing_axes() {
        let effects: EsmsEffects = toml::from_str("spirit = 0.5\nmatter = -0.25").unwrap();
        assert_eq!(effects.spirit, 0.5);
        assert_eq!(effects.essence, 0.0);
        assert_eq!(effects.matter, -0.25);
    }
}
