//! Element value object and the elemental-properties vector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::ParseNameError;

/// Tolerance used when treating a profile as a proportion.
pub const PROPORTION_EPSILON: f64 = 1e-9;

/// One of the four classical elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    /// All elements, in canonical order
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Element {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fire" => Ok(Element::Fire),
            "water" => Ok(Element::Water),
            "earth" => Ok(Element::Earth),
            "air" => Ok(Element::Air),
            _ => Err(ParseNameError::new("element", s)),
        }
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Mapping Element -> non-negative weight.
///
/// Used both as a raw tendency vector and, after [`normalized`](Self::normalized),
/// as a proportion summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementalProfile {
    #[serde(rename = "Fire", alias = "fire", alias = "FIRE", default)]
    pub fire: f64,
    #[serde(rename = "Water", alias = "water", alias = "WATER", default)]
    pub water: f64,
    #[serde(rename = "Earth", alias = "earth", alias = "EARTH", default)]
    pub earth: f64,
    #[serde(rename = "Air", alias = "air", alias = "AIR", default)]
    pub air: f64,
}

impl Default for ElementalProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ElementalProfile {
    /// Build a profile from explicit weights
    pub fn new(fire: f64, water: f64, earth: f64, air: f64) -> Self {
        Self {
            fire,
            water,
            earth,
            air,
        }
    }

    /// Uniform 0.25 vector
    pub fn neutral() -> Self {
        Self::new(0.25, 0.25, 0.25, 0.25)
    }

    /// All-zero vector (accumulator seed)
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Full weight on one element
    pub fn pure(element: Element) -> Self {
        let mut profile = Self::zero();
        profile.set(element, 1.0);
        profile
    }

    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Fire => self.fire,
            Element::Water => self.water,
            Element::Earth => self.earth,
            Element::Air => self.air,
        }
    }

    pub fn set(&mut self, element: Element, value: f64) {
        match element {
            Element::Fire => self.fire = value,
            Element::Water => self.water = value,
            Element::Earth => self.earth = value,
            Element::Air => self.air = value,
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        Element::ALL.iter().map(|e| self.get(*e)).sum()
    }

    /// Componentwise scale
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.fire * factor,
            self.water * factor,
            self.earth * factor,
            self.air * factor,
        )
    }

    /// Componentwise sum
    pub fn plus(&self, other: &ElementalProfile) -> Self {
        Self::new(
            self.fire + other.fire,
            self.water + other.water,
            self.earth + other.earth,
            self.air + other.air,
        )
    }

    /// Dot product with another profile
    pub fn dot(&self, other: &ElementalProfile) -> f64 {
        Element::ALL
            .iter()
            .map(|e| self.get(*e) * other.get(*e))
            .sum()
    }

    /// Rescale into a proportion summing to 1.0.
    ///
    /// Negative or non-finite components count as zero. A profile with no
    /// usable weight becomes the neutral vector.
    pub fn normalized(&self) -> Self {
        let mut clean = Self::zero();
        for element in Element::ALL {
            let value = self.get(element);
            if value.is_finite() && value > 0.0 {
                clean.set(element, value);
            }
        }

        let total = clean.total();
        if total <= PROPORTION_EPSILON {
            return Self::neutral();
        }
        clean.scaled(1.0 / total)
    }

    /// True when the weights already form a proportion (within epsilon)
    pub fn is_proportion(&self) -> bool {
        Element::ALL
            .iter()
            .all(|e| self.get(*e).is_finite() && self.get(*e) >= 0.0)
            && (self.total() - 1.0).abs() <= 1e-6
    }

    /// Element with the highest weight; ties resolve in canonical order
    pub fn dominant(&self) -> Element {
        let mut best = Element::Fire;
        for element in Element::ALL {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_keys_accept_any_common_case() {
        let lower: ElementalProfile = serde_json::from_str(r#"{"fire":0.5,"earth":0.5}"#).unwrap();
        assert_eq!(lower, ElementalProfile::new(0.5, 0.0, 0.5, 0.0));

        let upper: ElementalProfile = serde_json::from_str(r#"{"WATER":1.0}"#).unwrap();
        assert_eq!(upper.water, 1.0);

        assert!(serde_json::from_str::<ElementalProfile>(r#"{"aether":1.0}"#).is_err());
    }

    #[test]
    fn neutral_is_proportion() {
        assert!(ElementalProfile::neutral().is_proportion());
    }

    #[test]
    fn normalized_sums_to_one() {
        let profile = ElementalProfile::new(2.0, 1.0, 1.0, 0.0).normalized();
        assert!((profile.total() - 1.0).abs() < 1e-12);
        assert!((profile.fire - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalized_empty_profile_is_neutral() {
        assert_eq!(
            ElementalProfile::zero().normalized(),
            ElementalProfile::neutral()
        );
        assert_eq!(
            ElementalProfile::new(f64::NAN, -1.0, 0.0, 0.0).normalized(),
            ElementalProfile::neutral()
        );
    }

    #[test]
    fn dot_of_pure_profiles() {
        let fire = ElementalProfile::pure(Element::Fire);
        let water = ElementalProfile::pure(Element::Water);
        assert_eq!(fire.dot(&fire), 1.0);
        assert_eq!(fire.dot(&water), 0.0);
        assert!((fire.dot(&ElementalProfile::neutral()) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn dominant_prefers_canonical_order_on_ties() {
        assert_eq!(ElementalProfile::neutral().dominant(), Element::Fire);
        assert_eq!(
            ElementalProfile::new(0.1, 0.2, 0.6, 0.1).dominant(),
            Element::Earth
        );
    }

    #[test]
    fn element_parse_is_case_insensitive() {
        assert_eq!("fire".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!(" AIR ".parse::<Element>().unwrap(), Element::Air);
        assert!("aether".parse::<Element>().is_err());
    }

    #[test]
    fn profile_serde_uses_element_names() {
        let json = r#"{"Fire":0.4,"Water":0.3,"Earth":0.2,"Air":0.1}"#;
        let profile: ElementalProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.earth, 0.2);
        assert_eq!(serde_json::to_string(&profile).unwrap(), json);
    }

    #[test]
    fn profile_rejects_unknown_keys() {
        let json = r#"{"Fire":0.4,"Aether":0.6}"#;
        assert!(serde_json::from_str::<ElementalProfile>(json).is_err());
    }

    #[test]
    fn profile_missing_keys_default_to_zero() {
        let profile: ElementalProfile = serde_json::from_str(r#"{"Fire":1.0}"#).unwrap();
        assert_eq!(profile, ElementalProfile::pure(Element::Fire));
    }
}
