//! Configuration module for alchm
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ALCHM_*)
//! 3. Explicit `--config` file, else project config (.alchm/config.toml)
//! 4. User config (<config dir>/alchm/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, parse_with_warnings, ConfigWarning, PROJECT_CONFIG, USER_CONFIG};
pub use types::{AggregationConfig, CatalogConfig, EngineConfig};
