//! JSON candidate documents
//!
//! Either a bare array of candidates or `{ "candidates": [...] }`. Malformed
//! optional fields fall back to their defaults. A record that cannot be read
//! as a candidate at all (no name, not an object) is skipped with a warning;
//! the rest of the document still loads.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::entities::Candidate;
use crate::error::{EngineError, EngineResult};

/// Parse a candidate document
pub fn parse_candidates(content: &str) -> EngineResult<Vec<Candidate>> {
    let value: Value = serde_json::from_str(content)?;
    let records = match value {
        Value::Array(records) => records,
        Value::Object(mut root) => match root.remove("candidates") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(EngineError::InvalidCandidates {
                    message: "expected an array or a 'candidates' array".to_string(),
                })
            }
        },
        _ => {
            return Err(EngineError::InvalidCandidates {
                message: "expected an array or a 'candidates' array".to_string(),
            })
        }
    };

    let total = records.len();
    let candidates: Vec<Candidate> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable candidate");
                None
            }
        })
        .collect();

    tracing::debug!(total, loaded = candidates.len(), "parsed candidates");
    Ok(candidates)
}

/// Read and parse a candidate file
pub fn load_candidates(path: &Path) -> EngineResult<Vec<Candidate>> {
    let content = fs::read_to_string(path)?;
    parse_candidates(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CandidateKind;
    use crate::domain::value_objects::{Element, Sign, Tag};

    #[test]
    fn parses_bare_array() {
        let json = r#"[
            { "name": "Ratatouille", "elementalProfile": { "Fire": 0.3, "Water": 0.3, "Earth": 0.3, "Air": 0.1 } },
            { "name": "Roasting", "kind": "method" }
        ]"#;
        let candidates = parse_candidates(json).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].kind, CandidateKind::Method);
        let profile = candidates[0].elemental_profile.unwrap();
        assert_eq!(profile.get(Element::Air), 0.1);
    }

    #[test]
    fn parses_wrapped_document_and_skips_bad_records() {
        let json = r#"{ "candidates": [
            { "name": "Miso soup", "dietaryTags": ["Vegan"], "astrologicalInfluences": { "favorableZodiac": "cancer" } },
            { "description": "no name" },
            42
        ] }"#;
        let candidates = parse_candidates(json).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].has_tag(&Tag::new("vegan")));
        assert!(candidates[0].astrological_influences.is_favorable(Sign::Cancer));
    }

    #[test]
    fn bad_metadata_keeps_the_candidate() {
        let json = r#"[
            { "name": "A" },
            { "name": "B", "astrologicalInfluences": null },
            { "name": "C", "tags": "vegan" },
            { "name": "D", "kind": "dish" },
            { "name": "E", "tags": null }
        ]"#;
        let candidates = parse_candidates(json).unwrap();
        let names: Vec<_> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D", "E"]);
        assert!(candidates[2].has_tag(&Tag::new("vegan")));
        assert_eq!(candidates[3].kind, CandidateKind::Recipe);
        assert!(candidates[4].tags.is_empty());
    }

    #[test]
    fn rejects_non_list_documents() {
        assert!(matches!(
            parse_candidates(r#"{ "recipes": [] }"#),
            Err(EngineError::InvalidCandidates { .. })
        ));
        assert!(matches!(parse_candidates("not json"), Err(EngineError::Json(_))));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidates.json");
        fs::write(&path, r#"[{ "name": "Toast" }]"#).unwrap();
        assert_eq!(load_candidates(&path).unwrap()[0].name, "Toast");
    }
}
