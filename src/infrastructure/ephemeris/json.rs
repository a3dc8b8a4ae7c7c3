//! JSON position documents
//!
//! Accepted shapes:
//!
//! ```json
//! { "timestamp": "2024-06-21T12:00:00Z", "positions": { "Sun": { ... } } }
//! { "planetaryPositions": { "Sun": { ... } } }
//! { "Sun": { "sign": "gemini", "degree": 29, "isRetrograde": false } }
//! ```
//!
//! Unknown planet keys and unusable records are skipped with a warning; only
//! a document that is not a JSON object at all is an error.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::entities::{PlanetaryPosition, PositionSnapshot, RawPosition};
use crate::domain::ports::{EphemerisError, EphemerisResult, EphemerisSource};
use crate::domain::value_objects::Planet;
use crate::error::{EngineError, EngineResult};

const POSITION_KEYS: [&str; 3] = ["positions", "planetaryPositions", "planetary_positions"];

/// Parse a position document into a snapshot
pub fn parse_snapshot(content: &str) -> EngineResult<PositionSnapshot> {
    let value: Value = serde_json::from_str(content).map_err(|e| EngineError::InvalidPositions {
        message: e.to_string(),
    })?;
    let Value::Object(root) = value else {
        return Err(EngineError::InvalidPositions {
            message: "expected a JSON object".to_string(),
        });
    };

    let timestamp = root.get("timestamp").and_then(parse_timestamp);
    let nested = POSITION_KEYS
        .iter()
        .find_map(|key| root.get(*key).and_then(Value::as_object));

    let mut snapshot = match nested {
        Some(positions) => positions_from_map(positions),
        None => positions_from_map(&root),
    };
    snapshot.timestamp = timestamp;

    tracing::debug!(planets = snapshot.len(), "parsed position snapshot");
    Ok(snapshot)
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let raw = value.as_str()?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(timestamp = raw, error = %e, "ignoring unparsable snapshot timestamp");
            None
        }
    }
}

fn positions_from_map(map: &Map<String, Value>) -> PositionSnapshot {
    let positions = map.iter().filter_map(|(key, record)| {
        if key == "timestamp" {
            return None;
        }
        let planet = match key.parse::<Planet>() {
            Ok(planet) => planet,
            Err(e) => {
                tracing::warn!(key = key.as_str(), error = %e, "skipping unknown planet");
                return None;
            }
        };
        match serde_json::from_value::<RawPosition>(record.clone()) {
            Ok(raw) => {
                let position = PlanetaryPosition::from_raw(planet, &raw);
                if position.sign.is_none() {
                    tracing::warn!(%planet, "no usable sign; weighting planet neutrally");
                }
                Some(position)
            }
            Err(e) => {
                tracing::warn!(%planet, error = %e, "skipping malformed position record");
                None
            }
        }
    });
    PositionSnapshot::from_positions(positions)
}

/// Ephemeris source reading a JSON document from disk on every call
#[derive(Debug, Clone)]
pub struct JsonFileEphemeris {
    path: PathBuf,
}

impl JsonFileEphemeris {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EphemerisSource for JsonFileEphemeris {
    fn snapshot(&self) -> EphemerisResult<PositionSnapshot> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_snapshot(&content).map_err(|e| EphemerisError::Malformed(e.to_string()))
    }
}
