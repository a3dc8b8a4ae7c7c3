//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use alchm::presentation::factory;
//!
//! let config = factory::resolve_config(None)?;
//! let catalog = factory::create_catalog(&config)?;
//! let use_case = factory::create_ranking_use_case(&catalog, Path::new("now.json"));
//! let result = use_case.execute(&candidates, &RankingOptions::from_config(&config));
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_catalog, create_ranking_use_case, resolve_config};
pub use output::OutputFormat;
