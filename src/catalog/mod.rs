//! Alchemical pillar catalog
//!
//! One immutable table mapping cooking-method names to pillars. Enrichments
//! are pure functions of the pillar definitions, so they are computed when
//! the catalog is built and live as long as the catalog does. Reloading means
//! building a new catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{AlchemicalPillar, ElementalAssociation, DEFAULT_PILLAR_ID};
use crate::domain::services::{enrich, PillarEnrichment, PillarMatch};
use crate::domain::value_objects::{normalize_key, Element, EsmsEffects, Planet};
use crate::error::{EngineError, EngineResult};

const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    pillar: Vec<PillarDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PillarDef {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    effects: EsmsEffects,
    #[serde(default)]
    planets: Vec<Planet>,
    #[serde(default)]
    element: Option<ElementDef>,
    #[serde(default)]
    methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementDef {
    primary: Element,
    #[serde(default)]
    secondary: Option<Element>,
}

/// A pillar together with its precomputed enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub pillar: AlchemicalPillar,
    pub enrichment: PillarEnrichment,
    pub methods: Vec<String>,
}

impl CatalogEntry {
    fn build(pillar: AlchemicalPillar, methods: Vec<String>) -> EngineResult<Self> {
        pillar.effects.validate()?;
        let enrichment = enrich(&pillar)?;
        Ok(Self {
            pillar,
            enrichment,
            methods,
        })
    }

    pub fn as_match(&self) -> PillarMatch<'_> {
        PillarMatch {
            pillar: &self.pillar,
            enrichment: &self.enrichment,
        }
    }
}

/// Immutable method-name -> pillar table
#[derive(Debug, Clone)]
pub struct PillarCatalog {
    default: CatalogEntry,
    entries: BTreeMap<u32, CatalogEntry>,
    methods: BTreeMap<String, u32>,
}

impl PillarCatalog {
    /// The catalog embedded in the binary
    pub fn builtin() -> EngineResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            EngineError::InvalidCatalog { message } => EngineError::InvalidCatalog {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    /// Load a catalog file, or the built-in catalog when no path is given
    pub fn load_or_builtin(path: Option<&Path>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| EngineError::InvalidCatalog {
                message: e.to_string(),
            })?;

        let pillars = file
            .pillar
            .into_iter()
            .map(|def| {
                let mut planets: Vec<Planet> = Vec::with_capacity(def.planets.len());
                for planet in def.planets {
                    if !planets.contains(&planet) {
                        planets.push(planet);
                    }
                }
                let association = def
                    .element
                    .map(|e| ElementalAssociation::from_parts(Some(e.primary), e.secondary))
                    .unwrap_or(ElementalAssociation::Neutral);
                let pillar = AlchemicalPillar {
                    id: def.id,
                    name: def.name,
                    description: def.description,
                    effects: def.effects,
                    planetary_associations: planets,
                    elemental_associations: association,
                };
                (pillar, def.methods)
            })
            .collect();

        Self::from_pillars(pillars)
    }

    /// Build from pillar definitions and their method names.
    ///
    /// Rejects a redefined id 0, duplicate ids, and a method name claimed by
    /// two different pillars.
    pub fn from_pillars(pillars: Vec<(AlchemicalPillar, Vec<String>)>) -> EngineResult<Self> {
        let default = CatalogEntry::build(AlchemicalPillar::neutral_default(), Vec::new())?;
        let mut entries = BTreeMap::new();
        let mut methods: BTreeMap<String, u32> = BTreeMap::new();

        for (pillar, method_names) in pillars {
            let id = pillar.id;
            if id == DEFAULT_PILLAR_ID {
                return Err(invalid(format!(
                    "pillar id {DEFAULT_PILLAR_ID} is reserved for the default pillar"
                )));
            }
            if entries.contains_key(&id) {
                return Err(invalid(format!("duplicate pillar id {id}")));
            }

            let keys = std::iter::once(pillar.name.as_str())
                .chain(method_names.iter().map(String::as_str))
                .map(normalize_key)
                .filter(|key| !key.is_empty());
            for key in keys {
                if let Some(&owner) = methods.get(&key) {
                    if owner != id {
                        return Err(invalid(format!(
                            "method '{key}' is claimed by pillars {owner} and {id}"
                        )));
                    }
                }
                methods.insert(key, id);
            }

            entries.insert(id, CatalogEntry::build(pillar, method_names)?);
        }

        tracing::debug!(
            pillars = entries.len(),
            methods = methods.len(),
            "pillar catalog built"
        );

        Ok(Self {
            default,
            entries,
            methods,
        })
    }

    /// Look up a method name without falling back
    pub fn lookup(&self, method: &str) -> Option<&CatalogEntry> {
        self.methods
            .get(&normalize_key(method))
            .and_then(|id| self.entries.get(id))
    }

    /// Resolve a method name, falling back to the default pillar.
    pub fn resolve(&self, method: &str) -> &CatalogEntry {
        match self.lookup(method) {
            Some(entry) => entry,
            None => {
                tracing::warn!(
                    method,
                    "unknown cooking method; using the default neutral pillar"
                );
                &self.default
            }
        }
    }

    /// Entry by pillar id; id 0 is the default pillar
    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        if id == DEFAULT_PILLAR_ID {
            Some(&self.default)
        } else {
            self.entries.get(&id)
        }
    }

    pub fn default_entry(&self) -> &CatalogEntry {
        &self.default
    }

    /// Catalog pillars in id order, default excluded
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidCatalog { message }
}
