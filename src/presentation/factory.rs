//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::RankingUseCase;
use crate::catalog::PillarCatalog;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::infrastructure::JsonFileEphemeris;

/// Type alias for the concrete RankingUseCase reading positions from a file
pub type ConcreteRankingUseCase<'a> = RankingUseCase<'a, JsonFileEphemeris>;

/// Resolve configuration: an explicit file, else project/user config, else
/// defaults. Environment overrides apply in every case.
pub fn resolve_config(explicit: Option<&Path>) -> EngineResult<EngineConfig> {
    match explicit {
        Some(path) => {
            let (config, warnings) = EngineConfig::load_with_warnings(path)?;
            for warning in &warnings {
                tracing::warn!("{warning}");
            }
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(EngineConfig::load_or_default(cwd.as_deref()))
        }
    }
}

/// The configured catalog, or the built-in one
pub fn create_catalog(config: &EngineConfig) -> EngineResult<PillarCatalog> {
    PillarCatalog::load_or_builtin(config.catalog_path())
}

/// Create a ranking use case reading positions from `positions`
pub fn create_ranking_use_case<'a>(
    catalog: &'a PillarCatalog,
    positions: &Path,
) -> ConcreteRankingUseCase<'a> {
    RankingUseCase::new(catalog, JsonFileEphemeris::new(positions))
}
