//! Ranking Module
//!
//! Orchestrates recommendation ranking.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`RankingOptions`, `RankingFilters`)
//! - `result` - Result types (`RankingResult`)
//! - `use_case` - Core use case logic (`RankingUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use alchm::application::ranking::{RankingOptions, RankingUseCase};
//!
//! let use_case = RankingUseCase::new(&catalog, ephemeris);
//! let result = use_case.execute(&candidates, &RankingOptions::new());
//! ```

mod options;
mod result;
mod use_case;

pub use options::{RankingFilters, RankingOptions};
pub use result::RankingResult;
pub use use_case::RankingUseCase;
