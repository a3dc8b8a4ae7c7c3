//! Normalized free-form tags (dietary labels, tools, method names)

use serde::{Deserialize, Deserializer, Serialize};

/// Normalize a lookup key: trimmed, lowercase, spaces and underscores as `-`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// A normalized tag such as `gluten-free` or `dutch-oven`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_key(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Tag::new(raw)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Tag::new(String::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_collapses_separators() {
        assert_eq!(normalize_key("  Gluten Free "), "gluten-free");
        assert_eq!(normalize_key("sous_vide"), "sous-vide");
        assert_eq!(normalize_key("Pan--Frying"), "pan-frying");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn tag_deserialize_normalizes() {
        let tag: Tag = serde_json::from_str("\"Dairy_Free\"").unwrap();
        assert_eq!(tag.as_str(), "dairy-free");
    }

    #[test]
    fn tags_compare_after_normalization() {
        assert_eq!(Tag::new("Vegan"), Tag::from("vegan "));
    }
}
