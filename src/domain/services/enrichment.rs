//! Per-pillar enrichment: the full thermodynamic pipeline for one pillar

use serde::Serialize;

use super::classification::{classify, derive_modifiers, MonicaModifiers, PillarClassification};
use super::conditions::{synthesize, OptimalConditions};
use super::kalchm::compute_kalchm;
use super::monica::compute_monica;
use super::thermodynamics::{compute_thermodynamics, ThermodynamicProfile};
use crate::domain::entities::AlchemicalPillar;
use crate::domain::value_objects::MonicaValue;
use crate::error::EngineResult;

/// Everything derived from a pillar definition.
///
/// A pure function of the pillar, so it is computed once per catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarEnrichment {
    pub pillar_id: u32,
    pub name: String,
    pub kalchm: f64,
    pub monica_constant: MonicaValue,
    pub monica_classification: PillarClassification,
    pub monica_modifiers: MonicaModifiers,
    pub thermodynamic_profile: ThermodynamicProfile,
    pub optimal_conditions: OptimalConditions,
}

pub fn enrich(pillar: &AlchemicalPillar) -> EngineResult<PillarEnrichment> {
    let thermo = compute_thermodynamics(pillar);
    let kalchm = compute_kalchm(&pillar.effects)?;
    let monica = compute_monica(thermo.gregs_energy, thermo.reactivity, kalchm);

    Ok(PillarEnrichment {
        pillar_id: pillar.id,
        name: pillar.name.clone(),
        kalchm,
        monica_constant: monica,
        monica_classification: classify(monica, kalchm),
        monica_modifiers: derive_modifiers(monica),
        thermodynamic_profile: thermo,
        optimal_conditions: synthesize(monica, &thermo),
    })
}
