//! Pillar classification and Monica-driven modifiers

use serde::Serialize;

use crate::domain::value_objects::MonicaValue;

/// Degrees Fahrenheit per unit of Monica
pub const TEMPERATURE_PER_MONICA: f64 = 15.0;
/// Timing percent per unit of Monica
pub const TIMING_PER_MONICA: f64 = 10.0;
/// |Monica| at or below this leaves intensity unchanged
pub const INTENSITY_DEADBAND: f64 = 0.1;

/// Round half toward positive infinity (-2.5 -> -2, 2.5 -> 3)
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Qualitative class of a pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PillarClassification {
    Stable,
    Balanced,
    Transformative,
    #[serde(rename = "Highly Volatile")]
    HighlyVolatile,
    #[serde(rename = "Spirit-Dominant")]
    SpiritDominant,
    #[serde(rename = "Matter-Dominant")]
    MatterDominant,
}

impl PillarClassification {
    pub fn label(&self) -> &'static str {
        match self {
            PillarClassification::Stable => "Stable",
            PillarClassification::Balanced => "Balanced",
            PillarClassification::Transformative => "Transformative",
            PillarClassification::HighlyVolatile => "Highly Volatile",
            PillarClassification::SpiritDominant => "Spirit-Dominant",
            PillarClassification::MatterDominant => "Matter-Dominant",
        }
    }
}

impl std::fmt::Display for PillarClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify by |monica|, or by kalchm when monica is undefined.
pub fn classify(monica: MonicaValue, kalchm: f64) -> PillarClassification {
    match monica {
        MonicaValue::Undefined if kalchm > 1.0 => PillarClassification::SpiritDominant,
        MonicaValue::Undefined => PillarClassification::MatterDominant,
        MonicaValue::Defined(m) => match m.abs() {
            a if a > 2.0 => PillarClassification::HighlyVolatile,
            a if a > 1.0 => PillarClassification::Transformative,
            a if a > 0.5 => PillarClassification::Balanced,
            _ => PillarClassification::Stable,
        },
    }
}

/// Direction to push cooking intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityModifier {
    Increase,
    Decrease,
    Maintain,
}

impl std::fmt::Display for IntensityModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntensityModifier::Increase => write!(f, "increase"),
            IntensityModifier::Decrease => write!(f, "decrease"),
            IntensityModifier::Maintain => write!(f, "maintain"),
        }
    }
}

/// Temperature/timing deltas derived from Monica
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonicaModifiers {
    pub temperature_adjustment_f: i32,
    pub timing_adjustment_percent: i32,
    pub intensity_modifier: IntensityModifier,
}

impl MonicaModifiers {
    pub fn neutral() -> Self {
        Self {
            temperature_adjustment_f: 0,
            timing_adjustment_percent: 0,
            intensity_modifier: IntensityModifier::Maintain,
        }
    }
}

pub fn derive_modifiers(monica: MonicaValue) -> MonicaModifiers {
    let MonicaValue::Defined(m) = monica else {
        return MonicaModifiers::neutral();
    };

    let intensity_modifier = if m > INTENSITY_DEADBAND {
        IntensityModifier::Increase
    } else if m < -INTENSITY_DEADBAND {
        IntensityModifier::Decrease
    } else {
        IntensityModifier::Maintain
    };

    MonicaModifiers {
        temperature_adjustment_f: round_half_up(m * TEMPERATURE_PER_MONICA),
        timing_adjustment_percent: round_half_up(m * TIMING_PER_MONICA),
        intensity_modifier,
    }
}
