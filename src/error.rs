//! Error types for alchm
//!
//! Uses `thiserror` for library errors. Undefined Monica values, missing
//! planetary data and unknown method names are not errors: they are
//! recovered where they occur and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Kalchm left the strictly positive domain
    #[error("kalchm domain violation ({kalchm}): {reason}")]
    Domain { kalchm: f64, reason: String },

    /// ESMS effect outside [-1, 1] or not finite
    #[error("invalid {axis} effect {value}: expected a finite value in [-1, 1]")]
    InvalidEffect { axis: &'static str, value: f64 },

    /// Catalog definition rejected at load time
    #[error("invalid pillar catalog: {message}")]
    InvalidCatalog { message: String },

    /// Position snapshot could not be parsed at all
    #[error("invalid position snapshot: {message}")]
    InvalidPositions { message: String },

    /// Candidate document is not a list of candidates
    #[error("invalid candidate document: {message}")]
    InvalidCandidates { message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
