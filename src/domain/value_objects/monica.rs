//! Monica constant value
//!
//! "Undefined" marks a stable, non-volatile pillar. It is a regular result,
//! kept apart from floating-point NaN so the two cannot be confused.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result of the Monica computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonicaValue {
    Defined(f64),
    Undefined,
}

impl MonicaValue {
    pub fn is_defined(&self) -> bool {
        matches!(self, MonicaValue::Defined(_))
    }

    /// The value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            MonicaValue::Defined(v) => Some(*v),
            MonicaValue::Undefined => None,
        }
    }
}

impl From<Option<f64>> for MonicaValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => MonicaValue::Defined(v),
            _ => MonicaValue::Undefined,
        }
    }
}

impl std::fmt::Display for MonicaValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonicaValue::Defined(v) => write!(f, "{v:.4}"),
            MonicaValue::Undefined => write!(f, "undefined"),
        }
    }
}

// Serialized as a float or `null`.
impl Serialize for MonicaValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonicaValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_float_or_null() {
        assert_eq!(
            serde_json::to_string(&MonicaValue::Defined(1.5)).unwrap(),
            "1.5"
        );
        assert_eq!(
            serde_json::to_string(&MonicaValue::Undefined).unwrap(),
            "null"
        );
    }

    #[test]
    fn deserializes_null_as_undefined() {
        let value: MonicaValue = serde_json::from_str("null").unwrap();
        assert_eq!(value, MonicaValue::Undefined);
        let value: MonicaValue = serde_json::from_str("-0.25").unwrap();
        assert_eq!(value, MonicaValue::Defined(-0.25));
    }

    #[test]
    fn non_finite_option_is_undefined() {
        assert_eq!(MonicaValue::from(Some(f64::NAN)), MonicaValue::Undefined);
        assert_eq!(MonicaValue::from(None), MonicaValue::Undefined);
    }

    #[test]
    fn display() {
        assert_eq!(MonicaValue::Defined(0.5).to_string(), "0.5000");
        assert_eq!(MonicaValue::Undefined.to_string(), "undefined");
    }
}
