//! Subcommand handlers

pub mod moment;
pub mod pillar;
pub mod pillars;
pub mod rank;
