//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::services::AggregationMode;
use crate::domain::value_objects::{Planet, Season};

/// alchm - alchemical thermodynamics and recommendation scoring
#[derive(Parser, Debug)]
#[command(name = "alchm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: .alchm/config.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the enrichment of every catalog pillar
    Pillars,

    /// Resolve a cooking method to its pillar
    Pillar {
        /// Method or pillar name (unknown names resolve to the neutral pillar)
        method: String,
    },

    /// Show the moment derived from a position snapshot
    Moment {
        /// JSON position snapshot
        #[arg(short, long)]
        positions: PathBuf,

        /// Season to use instead of the derived one
        #[arg(long)]
        season: Option<Season>,

        /// Elemental aggregation mode (mean | mass-weighted)
        #[arg(long)]
        aggregation: Option<AggregationMode>,
    },

    /// Rank candidates against the moment
    Rank {
        /// JSON position snapshot
        #[arg(short, long)]
        positions: PathBuf,

        /// JSON candidate list
        #[arg(short, long)]
        candidates: PathBuf,

        /// Season to use instead of the derived one
        #[arg(long)]
        season: Option<Season>,

        /// Dominant planets, comma-separated (default: derived from the snapshot)
        #[arg(long, value_delimiter = ',')]
        dominant: Option<Vec<Planet>>,

        /// Tags every candidate must carry
        #[arg(long, value_delimiter = ',')]
        require: Vec<String>,

        /// Tags no candidate may carry
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Available tools; candidates needing anything else are dropped
        #[arg(long, value_delimiter = ',')]
        tools: Option<Vec<String>>,

        /// Keep only the top N
        #[arg(short, long)]
        limit: Option<usize>,

        /// Elemental aggregation mode (mean | mass-weighted)
        #[arg(long)]
        aggregation: Option<AggregationMode>,
    },
}
