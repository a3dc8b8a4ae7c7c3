//! Alchemical pillar entity

use serde::{Serialize, Serializer};

use crate::domain::value_objects::{Element, EsmsEffects, Planet};

/// Id reserved for the neutral fallback pillar
pub const DEFAULT_PILLAR_ID: u32 = 0;

/// Elemental association of a pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementalAssociation {
    /// No elemental bias (the default pillar)
    Neutral,
    /// A single primary element
    Pure(Element),
    /// Primary element blended with a secondary one
    Blend { primary: Element, secondary: Element },
}

impl ElementalAssociation {
    /// Build from optional parts; a secondary equal to the primary collapses to `Pure`.
    pub fn from_parts(primary: Option<Element>, secondary: Option<Element>) -> Self {
        match (primary, secondary) {
            (None, _) => ElementalAssociation::Neutral,
            (Some(p), None) => ElementalAssociation::Pure(p),
            (Some(p), Some(s)) if p == s => ElementalAssociation::Pure(p),
            (Some(primary), Some(secondary)) => ElementalAssociation::Blend { primary, secondary },
        }
    }

    pub fn primary(&self) -> Option<Element> {
        match self {
            ElementalAssociation::Neutral => None,
            ElementalAssociation::Pure(p) => Some(*p),
            ElementalAssociation::Blend { primary, .. } => Some(*primary),
        }
    }

    pub fn secondary(&self) -> Option<Element> {
        match self {
            ElementalAssociation::Blend { secondary, .. } => Some(*secondary),
            _ => None,
        }
    }
}

impl Serialize for ElementalAssociation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Parts {
            primary: Option<Element>,
            #[serde(skip_serializing_if = "Option::is_none")]
            secondary: Option<Element>,
        }

        Parts {
            primary: self.primary(),
            secondary: self.secondary(),
        }
        .serialize(serializer)
    }
}

/// Immutable catalog entry describing a transformation archetype
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlchemicalPillar {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub effects: EsmsEffects,
    pub planetary_associations: Vec<Planet>,
    pub elemental_associations: ElementalAssociation,
}

impl AlchemicalPillar {
    /// The documented fallback: id 0, neutral effects, neutral elements.
    pub fn neutral_default() -> Self {
        Self {
            id: DEFAULT_PILLAR_ID,
            name: "Neutral".to_string(),
            description: "Fallback for unrecognised cooking methods; exerts no alchemical bias"
                .to_string(),
            effects: EsmsEffects::neutral(),
            planetary_associations: Vec::new(),
            elemental_associations: ElementalAssociation::Neutral,
        }
    }

    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_PILLAR_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_collapses_duplicate_secondary() {
        assert_eq!(
            ElementalAssociation::from_parts(Some(Element::Fire), Some(Element::Fire)),
            ElementalAssociation::Pure(Element::Fire)
        );
        assert_eq!(
            ElementalAssociation::from_parts(None, Some(Element::Fire)),
            ElementalAssociation::Neutral
        );
    }

    #[test]
    fn default_pillar_is_neutral() {
        let pillar = AlchemicalPillar::neutral_default();
        assert!(pillar.is_default());
        assert_eq!(pillar.effects, EsmsEffects::neutral());
        assert_eq!(pillar.elemental_associations, ElementalAssociation::Neutral);
        assert!(pillar.planetary_associations.is_empty());
    }

    #[test]
    fn association_serializes_primary_and_secondary() {
        let blend = ElementalAssociation::Blend {
            primary: Element::Fire,
            secondary: Element::Earth,
        };
        assert_eq!(
            serde_json::to_string(&blend).unwrap(),
            r#"{"primary":"Fire","secondary":"Earth"}"#
        );
        assert_eq!(
            serde_json::to_string(&ElementalAssociation::Neutral).unwrap(),
            r#"{"primary":null}"#
        );
    }
}
