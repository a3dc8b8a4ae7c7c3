//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Project-level config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".alchm/config.toml";
/// User-level config location, relative to the platform config directory
pub const USER_CONFIG: &str = "alchm/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `catalog.path` is resolved against the config file's directory.
pub fn load_with_warnings(path: &Path) -> EngineResult<(EngineConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (mut config, warnings) = parse_with_warnings(&content, path)?;

    if let (Some(catalog), Some(dir)) = (config.catalog.path.as_mut(), path.parent()) {
        if catalog.is_relative() {
            *catalog = dir.join(&*catalog);
        }
    }

    Ok((config, warnings))
}

/// Parse config text, attributing warnings and errors to `file`
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> EngineResult<(EngineConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: EngineConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EngineError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// Unreadable or invalid files are logged and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> EngineConfig {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG));
    let user_config = dirs::config_dir().map(|dir| dir.join(USER_CONFIG));

    for candidate in [project_config, user_config].into_iter().flatten() {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{warning}");
                }
                tracing::debug!(file = %candidate.display(), "config loaded");
                return with_env_overrides(config);
            }
            Err(e) => {
                tracing::warn!(file = %candidate.display(), error = %e, "ignoring config file");
            }
        }
    }

    with_env_overrides(EngineConfig::default())
}

/// Apply environment variable overrides (ALCHM_* prefix)
pub fn with_env_overrides(config: EngineConfig) -> EngineConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup; unparsable values are ignored
pub fn apply_overrides<F>(mut config: EngineConfig, lookup: F) -> EngineConfig
where
    F: Fn(&str) -> Option<String>,
{
    // ALCHM_AGGREGATION
    if let Some(mode) = lookup("ALCHM_AGGREGATION") {
        match mode.parse() {
            Ok(mode) => config.aggregation.mode = mode,
            Err(e) => tracing::warn!("ignoring ALCHM_AGGREGATION: {e}"),
        }
    }

    // ALCHM_CATALOG
    if let Some(path) = lookup("ALCHM_CATALOG") {
        if !path.trim().is_empty() {
            config.catalog.path = Some(PathBuf::from(path));
        }
    }

    // ALCHM_ELEMENTAL_WEIGHT
    if let Some(weight) = lookup("ALCHM_ELEMENTAL_WEIGHT").and_then(|v| parse_weight(&v)) {
        config.scoring.elemental_weight = weight;
    }

    // ALCHM_SEASONAL_BONUS
    if let Some(bonus) = lookup("ALCHM_SEASONAL_BONUS").and_then(|v| parse_weight(&v)) {
        config.scoring.seasonal_bonus = bonus;
    }

    config
}

fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scoring",
        "base",
        "elemental_weight",
        "zodiac_favorable_bonus",
        "zodiac_unfavorable_penalty",
        "dignity_influence",
        "dominant_planet_bonus",
        "seasonal_bonus",
        "pillar_weight",
        "lunar_alignment_bonus",
        "hour_alignment_bonus",
        "dignity",
        "domicile",
        "exaltation",
        "peregrine",
        "detriment",
        "fall",
        "retrograde_penalty",
        "aggregation",
        "mode",
        "catalog",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
