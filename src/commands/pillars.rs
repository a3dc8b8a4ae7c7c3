use std::io;

use anyhow::Result;

use alchm::config::EngineConfig;
use alchm::domain::services::PillarEnrichment;
use alchm::presentation::{factory, output};

pub fn cmd_pillars(config: &EngineConfig, json: bool) -> Result<()> {
    let catalog = factory::create_catalog(config)?;
    let rows: Vec<&PillarEnrichment> = std::iter::once(catalog.default_entry())
        .chain(catalog.entries())
        .map(|entry| &entry.enrichment)
        .collect();

    let mut out = io::stdout().lock();
    if json {
        output::write_json(&mut out, &rows)?;
    } else {
        output::render_pillars(&mut out, &rows)?;
    }
    Ok(())
}
