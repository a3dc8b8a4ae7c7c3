//! Output Rendering
//!
//! Text tables for people, pretty JSON for scripts. Everything writes to a
//! caller-supplied `Write` so rendering is testable without a terminal.

use std::io::{self, Write};

use serde::Serialize;

use crate::application::RankingResult;
use crate::domain::services::{MomentContext, PillarEnrichment};
use crate::domain::value_objects::Element;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Result of resolving one method name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarLookup<'a> {
    pub query: &'a str,
    /// False when the name fell back to the neutral pillar
    pub matched: bool,
    pub enrichment: &'a PillarEnrichment,
    pub methods: &'a [String],
}

/// Write any serializable value as pretty JSON followed by a newline
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn join<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let joined: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

/// One row per pillar
pub fn render_pillars(out: &mut impl Write, enrichments: &[&PillarEnrichment]) -> io::Result<()> {
    writeln!(
        out,
        "{:>3}  {:<15} {:>10} {:>9}  {:<16} {:>5}  {:<8}",
        "ID", "PILLAR", "KALCHM", "MONICA", "CLASS", "TEMP", "TIMING"
    )?;
    for e in enrichments {
        writeln!(
            out,
            "{:>3}  {:<15} {:>10.6} {:>9}  {:<16} {:>4}F  {:<8}",
            e.pillar_id,
            e.name,
            e.kalchm,
            e.monica_constant.to_string(),
            e.monica_classification.to_string(),
            e.optimal_conditions.temperature_f,
            e.optimal_conditions.timing_bucket.to_string(),
        )?;
    }
    Ok(())
}

/// Full detail for one pillar
pub fn render_lookup(out: &mut impl Write, lookup: &PillarLookup<'_>) -> io::Result<()> {
    let e = lookup.enrichment;
    if !lookup.matched {
        writeln!(out, "'{}' is not a known method; using the neutral pillar", lookup.query)?;
    }
    writeln!(out, "{} (pillar {})", e.name, e.pillar_id)?;
    writeln!(out, "  methods:        {}", join(lookup.methods))?;
    writeln!(out, "  kalchm:         {:.6}", e.kalchm)?;
    writeln!(out, "  monica:         {}", e.monica_constant)?;
    writeln!(out, "  class:          {}", e.monica_classification)?;

    let t = &e.thermodynamic_profile;
    writeln!(
        out,
        "  thermodynamics: heat {:.3}, entropy {:.3}, reactivity {:.3}, greg {:.4}",
        t.heat, t.entropy, t.reactivity, t.gregs_energy
    )?;

    let m = &e.monica_modifiers;
    writeln!(
        out,
        "  modifiers:      {:+}F, {:+}% time, {}",
        m.temperature_adjustment_f, m.timing_adjustment_percent, m.intensity_modifier
    )?;

    let c = &e.optimal_conditions;
    writeln!(out, "  temperature:    {}F", c.temperature_f)?;
    writeln!(out, "  timing:         {}", c.timing_bucket)?;
    writeln!(out, "  hours:          {}", join(&c.planetary_hours))?;
    writeln!(out, "  lunar phases:   {}", join(c.lunar_phases.tags()))?;
    Ok(())
}

/// The moment context
pub fn render_moment(out: &mut impl Write, moment: &MomentContext) -> io::Result<()> {
    writeln!(out, "timestamp:        {}", fmt_opt(moment.timestamp))?;
    writeln!(out, "planets present:  {}", moment.planets_present)?;
    let profile = &moment.elemental_profile;
    writeln!(
        out,
        "elements:         {}",
        join(
            Element::ALL
                .iter()
                .map(|e| format!("{e} {:.3}", profile.get(*e)))
        )
    )?;
    writeln!(out, "dominant element: {}", profile.dominant())?;
    writeln!(out, "season:           {}", fmt_opt(moment.season))?;
    writeln!(out, "lunar phase:      {}", fmt_opt(moment.lunar_phase))?;
    if let Some(lit) = moment.moon_illumination {
        writeln!(out, "illumination:     {:.0}%", lit * 100.0)?;
    }
    writeln!(out, "hour ruler:       {}", fmt_opt(moment.hour_ruler))?;
    writeln!(out, "dominant planets: {}", join(&moment.dominant_planets))?;
    for body in &moment.zodiac_bodies {
        writeln!(
            out,
            "  {} in {} (dignity {:+.2})",
            body.planet, body.sign, body.dignity_strength
        )?;
    }
    Ok(())
}

/// Ranked candidates; breakdowns only when `verbose`
pub fn render_ranking(
    out: &mut impl Write,
    result: &RankingResult,
    verbose: bool,
) -> io::Result<()> {
    if result.ephemeris_fallback {
        writeln!(out, "positions unavailable; ranked with neutral weighting")?;
    }
    if result.is_empty() {
        writeln!(out, "no candidates")?;
    }
    for (rank, scored) in result.ranked.iter().enumerate() {
        let pillar = scored
            .pillar
            .as_ref()
            .map(|p| format!("  [{}]", p.name))
            .unwrap_or_default();
        writeln!(
            out,
            "{:>3}. {:<28} {:>7.3}  {}{}",
            rank + 1,
            scored.name,
            scored.score,
            scored.kind.to_string(),
            pillar
        )?;
        if verbose {
            for (factor, value) in &scored.breakdown {
                writeln!(out, "       {factor:<10} {value:>+7.3}")?;
            }
        }
    }
    if !result.excluded.is_empty() {
        writeln!(out, "excluded: {}", join(&result.excluded))?;
    }
    Ok(())
}
