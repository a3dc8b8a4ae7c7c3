//! Candidate recipes, ingredients and cooking methods

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::lenient;

use crate::domain::value_objects::{ElementalProfile, Planet, Season, Sign, Tag};

/// What a candidate represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    #[default]
    Recipe,
    Ingredient,
    #[serde(alias = "cooking-method", alias = "cooking_method")]
    Method,
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateKind::Recipe => write!(f, "recipe"),
            CandidateKind::Ingredient => write!(f, "ingredient"),
            CandidateKind::Method => write!(f, "method"),
        }
    }
}

/// Optional astrological metadata attached to a candidate.
///
/// Each set accepts a single name or a list of names. Unrecognised names
/// are dropped with a warning so one bad entry never sinks the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologicalInfluences {
    #[serde(default, deserialize_with = "lenient::name_set")]
    pub favorable_zodiac: BTreeSet<Sign>,
    #[serde(default, deserialize_with = "lenient::name_set")]
    pub unfavorable_zodiac: BTreeSet<Sign>,
    #[serde(default, deserialize_with = "lenient::name_set")]
    pub dominant_planets: BTreeSet<Planet>,
    #[serde(default, deserialize_with = "lenient::name_set")]
    pub seasonal_preference: BTreeSet<Season>,
}

impl AstrologicalInfluences {
    pub fn is_favorable(&self, sign: Sign) -> bool {
        self.favorable_zodiac.contains(&sign)
    }

    pub fn is_unfavorable(&self, sign: Sign) -> bool {
        self.unfavorable_zodiac.contains(&sign)
    }

    pub fn prefers(&self, season: Season) -> bool {
        self.seasonal_preference.contains(&season)
    }
}

/// A recipe, ingredient or cooking method to be ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub kind: CandidateKind,
    /// Method name used for the pillar lookup; defaults to `name` for methods
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<String>,
    #[serde(
        default,
        alias = "elementalProperties",
        deserialize_with = "lenient::profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub elemental_profile: Option<ElementalProfile>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub astrological_influences: AstrologicalInfluences,
    #[serde(default, alias = "dietaryTags", deserialize_with = "lenient::tag_set")]
    pub tags: BTreeSet<Tag>,
    #[serde(default, deserialize_with = "lenient::tag_set")]
    pub required_tools: BTreeSet<Tag>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, kind: CandidateKind) -> Self {
        Self {
            name: name.into(),
            kind,
            method: None,
            elemental_profile: None,
            astrological_influences: AstrologicalInfluences::default(),
            tags: BTreeSet::new(),
            required_tools: BTreeSet::new(),
        }
    }

    pub fn with_profile(mut self, profile: ElementalProfile) -> Self {
        self.elemental_profile = Some(profile);
        self
    }

    pub fn with_influences(mut self, influences: AstrologicalInfluences) -> Self {
        self.astrological_influences = influences;
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.tags = tags.into_iter().map(Tag::new).collect();
        self
    }

    pub fn with_tools<I, T>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.required_tools = tools.into_iter().map(Tag::new).collect();
        self
    }

    /// Name to resolve against the pillar catalog, for method candidates
    pub fn method_name(&self) -> Option<&str> {
        match self.kind {
            CandidateKind::Method => Some(self.method.as_deref().unwrap_or(&self.name)),
            _ => None,
        }
    }

    /// Normalized elemental proportion; missing or empty profiles are neutral
    pub fn elemental_proportion(&self) -> ElementalProfile {
        self.elemental_profile
            .map(|p| p.normalized())
            .unwrap_or_else(ElementalProfile::neutral)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn influences_accept_single_name_or_list() {
        let json = r#"{"favorableZodiac":"leo","unfavorableZodiac":["Pisces","virgo"],
                       "dominantPlanets":["Sun"],"seasonalPreference":"fall"}"#;
        let influences: AstrologicalInfluences = serde_json::from_str(json).unwrap();
        assert!(influences.is_favorable(Sign::Leo));
        assert!(influences.is_unfavorable(Sign::Virgo));
        assert!(influences.dominant_planets.contains(&Planet::Sun));
        assert!(influences.prefers(Season::Autumn));
    }

    #[test]
    fn influences_drop_unknown_names() {
        let json = r#"{"favorableZodiac":["leo","ophiuchus"],"dominantPlanets":42}"#;
        let influences: AstrologicalInfluences = serde_json::from_str(json).unwrap();
        assert_eq!(influences.favorable_zodiac.len(), 1);
        assert!(influences.dominant_planets.is_empty());
    }

    #[test]
    fn candidate_defaults_and_aliases() {
        let json = r#"{"name":"Ratatouille","elementalProperties":{"Fire":0.3,"Earth":0.5},
                       "dietaryTags":["Vegan","Gluten Free"]}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.kind, CandidateKind::Recipe);
        assert!(candidate.has_tag(&Tag::new("gluten-free")));
        assert_eq!(candidate.elemental_profile.unwrap().earth, 0.5);
        assert_eq!(candidate.method_name(), None);
    }

    #[test]
    fn malformed_profile_degrades_to_neutral() {
        let json = r#"{"name":"Mystery","elementalProfile":{"Aether":1.0}}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert!(candidate.elemental_profile.is_none());
        assert_eq!(candidate.elemental_proportion(), ElementalProfile::neutral());
    }

    #[test]
    fn method_name_falls_back_to_name() {
        let roast = Candidate::new("Roasting", CandidateKind::Method);
        assert_eq!(roast.method_name(), Some("Roasting"));

        let mut braise = Candidate::new("Slow braise", CandidateKind::Method);
        braise.method = Some("braising".to_string());
        assert_eq!(braise.method_name(), Some("braising"));
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let json = r#"{"name":"Soup","kind":"dish","method":7,
                       "astrologicalInfluences":null,"tags":null,"requiredTools":{"oven":true}}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.kind, CandidateKind::Recipe);
        assert_eq!(candidate.method, None);
        assert_eq!(candidate.astrological_influences, AstrologicalInfluences::default());
        assert!(candidate.tags.is_empty());
        assert!(candidate.required_tools.is_empty());
    }

    #[test]
    fn single_tag_string_is_one_tag() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"name":"Salad","tags":"Vegan","requiredTools":"Knife"}"#)
                .unwrap();
        assert!(candidate.has_tag(&Tag::new("vegan")));
        assert!(candidate.required_tools.contains(&Tag::new("knife")));
    }

    #[test]
    fn kind_accepts_cooking_method_alias() {
        let kind: CandidateKind = serde_json::from_str("\"cooking_method\"").unwrap();
        assert_eq!(kind, CandidateKind::Method);
    }
}
