use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use alchm::config::EngineConfig;
use alchm::domain::ports::EphemerisSource;
use alchm::domain::services::{AggregationMode, MomentContext, MomentOverrides};
use alchm::domain::value_objects::Season;
use alchm::infrastructure::JsonFileEphemeris;
use alchm::presentation::output;

pub fn cmd_moment(
    config: &EngineConfig,
    positions: &Path,
    season: Option<Season>,
    aggregation: Option<AggregationMode>,
    json: bool,
) -> Result<()> {
    let snapshot = JsonFileEphemeris::new(positions)
        .snapshot()
        .with_context(|| format!("reading positions from {}", positions.display()))?;

    let overrides = MomentOverrides {
        season,
        dominant_planets: None,
    };
    let moment = MomentContext::from_snapshot(
        &snapshot,
        aggregation.unwrap_or(config.aggregation.mode),
        &config.dignity,
        &overrides,
    );

    let mut out = io::stdout().lock();
    if json {
        output::write_json(&mut out, &moment)?;
    } else {
        output::render_moment(&mut out, &moment)?;
    }
    Ok(())
}
