use std::io;

use anyhow::Result;

use alchm::config::EngineConfig;
use alchm::presentation::output::{self, PillarLookup};
use alchm::presentation::factory;

/// Unknown names resolve to the neutral pillar and still succeed
pub fn cmd_pillar(config: &EngineConfig, method: &str, json: bool) -> Result<()> {
    let catalog = factory::create_catalog(config)?;
    let matched = catalog.lookup(method).is_some();
    let entry = catalog.resolve(method);

    let lookup = PillarLookup {
        query: method,
        matched,
        enrichment: &entry.enrichment,
        methods: &entry.methods,
    };

    let mut out = io::stdout().lock();
    if json {
        output::write_json(&mut out, &lookup)?;
    } else {
        output::render_lookup(&mut out, &lookup)?;
    }
    Ok(())
}
