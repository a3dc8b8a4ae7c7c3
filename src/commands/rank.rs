use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use alchm::application::{RankingFilters, RankingOptions};
use alchm::config::EngineConfig;
use alchm::domain::services::AggregationMode;
use alchm::domain::value_objects::{Planet, Season};
use alchm::infrastructure::load_candidates;
use alchm::presentation::{factory, output};

/// Flags of the `rank` subcommand
#[derive(Debug)]
pub struct RankArgs {
    pub positions: PathBuf,
    pub candidates: PathBuf,
    pub season: Option<Season>,
    pub dominant: Option<Vec<Planet>>,
    pub require: Vec<String>,
    pub exclude: Vec<String>,
    pub tools: Option<Vec<String>>,
    pub limit: Option<usize>,
    pub aggregation: Option<AggregationMode>,
}

impl RankArgs {
    fn options(&self, config: &EngineConfig) -> RankingOptions {
        let mut filters = RankingFilters::default()
            .require(&self.require)
            .exclude(&self.exclude);
        if let Some(tools) = &self.tools {
            filters = filters.with_tools(tools);
        }

        let mut options = RankingOptions::from_config(config).with_filters(filters);
        if let Some(season) = self.season {
            options = options.with_season(season);
        }
        if let Some(dominant) = &self.dominant {
            options = options.with_dominant_planets(dominant.iter().copied());
        }
        if let Some(limit) = self.limit {
            options = options.with_limit(limit);
        }
        if let Some(aggregation) = self.aggregation {
            options = options.with_aggregation(aggregation);
        }
        options
    }
}

pub fn cmd_rank(config: &EngineConfig, args: &RankArgs, json: bool, verbose: u8) -> Result<()> {
    let candidates = load_candidates(&args.candidates)
        .with_context(|| format!("reading candidates from {}", args.candidates.display()))?;
    let catalog = factory::create_catalog(config)?;
    let use_case = factory::create_ranking_use_case(&catalog, &args.positions);

    let result = use_case.execute(&candidates, &args.options(config));

    let mut out = io::stdout().lock();
    if json {
        output::write_json(&mut out, &result)?;
    } else {
        output::render_ranking(&mut out, &result, verbose > 0)?;
    }
    Ok(())
}
