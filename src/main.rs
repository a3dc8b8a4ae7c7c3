//! alchm CLI - alchemical thermodynamics and recommendation scoring
//!
//! Usage: alchm <COMMAND>
//!
//! Commands:
//!   pillars  Enrichment table for every catalog pillar
//!   pillar   Resolve a cooking method to its pillar
//!   moment   Moment context from a position snapshot
//!   rank     Rank candidates against the moment

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use alchm::presentation::{factory, Cli, Commands};

mod commands;

use commands::rank::RankArgs;

/// Logs go to stderr so JSON on stdout stays clean
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = factory::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Pillars => commands::pillars::cmd_pillars(&config, cli.json),
        Commands::Pillar { method } => commands::pillar::cmd_pillar(&config, &method, cli.json),
        Commands::Moment {
            positions,
            season,
            aggregation,
        } => commands::moment::cmd_moment(&config, &positions, season, aggregation, cli.json),
        Commands::Rank {
            positions,
            candidates,
            season,
            dominant,
            require,
            exclude,
            tools,
            limit,
            aggregation,
        } => {
            let args = RankArgs {
                positions,
                candidates,
                season,
                dominant,
                require,
                exclude,
                tools,
                limit,
                aggregation,
            };
            commands::rank::cmd_rank(&config, &args, cli.json, cli.verbose)
        }
    }
}
