//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RankingUseCase` - Takes a snapshot, filters, scores and orders candidates

pub mod ranking;

pub use ranking::{RankingFilters, RankingOptions, RankingResult, RankingUseCase};
