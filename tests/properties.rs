//! Property tests for alchm.
//!
//! Properties use randomized input generation to protect invariants:
//! Kalchm positivity, Monica degeneracy, determinism, ranking stability
//! and the temperature bound.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/kalchm.rs"]
mod kalchm;

#[path = "properties/pipeline.rs"]
mod pipeline;

#[path = "properties/ranking.rs"]
mod ranking;
