//! Recommendation scoring
//!
//! A [`MomentContext`] is derived once from the position snapshot, then every
//! candidate is scored against it independently. Scores are relative; the
//! breakdown records each factor's contribution.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::affinity::{aggregate_profile, AggregationMode};
use super::celestial::{illumination, lunar_phase_at, phase_position, planetary_hour_ruler};
use super::dignity::{dignity_strength, DignityWeights};
use super::enrichment::PillarEnrichment;
use super::thermodynamics::{PRIMARY_WEIGHT, SECONDARY_WEIGHT};
use crate::domain::entities::{
    AlchemicalPillar, Candidate, CandidateKind, ElementalAssociation, PositionSnapshot,
};
use crate::domain::value_objects::{ElementalProfile, LunarPhase, Planet, Season, Sign};

pub const FACTOR_BASE: &str = "base";
pub const FACTOR_ELEMENTAL: &str = "elemental";
pub const FACTOR_ZODIAC: &str = "zodiac";
pub const FACTOR_PLANETARY: &str = "planetary";
pub const FACTOR_SEASONAL: &str = "seasonal";
pub const FACTOR_PILLAR: &str = "pillar";
pub const FACTOR_LUNAR: &str = "lunar";
pub const FACTOR_HOUR: &str = "hour";

/// Additive scoring weights. Stable for the duration of a ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub base: f64,
    pub elemental_weight: f64,
    pub zodiac_favorable_bonus: f64,
    pub zodiac_unfavorable_penalty: f64,
    pub dignity_influence: f64,
    pub dominant_planet_bonus: f64,
    pub seasonal_bonus: f64,
    pub pillar_weight: f64,
    pub lunar_alignment_bonus: f64,
    pub hour_alignment_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 0.0,
            elemental_weight: 1.0,
            zodiac_favorable_bonus: 0.3,
            zodiac_unfavorable_penalty: 0.3,
            dignity_influence: 0.5,
            dominant_planet_bonus: 0.15,
            seasonal_bonus: 0.2,
            pillar_weight: 0.25,
            lunar_alignment_bonus: 0.1,
            hour_alignment_bonus: 0.1,
        }
    }
}

/// A body whose sign is checked against favourable/unfavourable zodiac
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacBody {
    pub planet: Planet,
    pub sign: Sign,
    pub dignity_strength: f64,
}

/// Caller-supplied facts that take precedence over derived ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MomentOverrides {
    pub season: Option<Season>,
    /// Dominant planets by house or hour, supplied externally
    pub dominant_planets: Option<BTreeSet<Planet>>,
}

/// The moment as seen by the scorer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub planets_present: usize,
    pub elemental_profile: ElementalProfile,
    pub season: Option<Season>,
    pub lunar_phase: Option<LunarPhase>,
    /// Illuminated fraction of the lunar disc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon_illumination: Option<f64>,
    pub hour_ruler: Option<Planet>,
    pub dominant_planets: BTreeSet<Planet>,
    pub zodiac_bodies: Vec<ZodiacBody>,
}

impl MomentContext {
    pub fn from_snapshot(
        snapshot: &PositionSnapshot,
        aggregation: AggregationMode,
        dignity: &DignityWeights,
        overrides: &MomentOverrides,
    ) -> Self {
        let lunar_phase = snapshot.timestamp.map(lunar_phase_at);
        let moon_illumination = snapshot
            .timestamp
            .map(|t| illumination(phase_position(t)));
        let hour_ruler = snapshot.timestamp.map(planetary_hour_ruler);

        let season = overrides
            .season
            .or_else(|| snapshot.sign_of(Planet::Sun).map(Season::of_sun_sign))
            .or_else(|| snapshot.timestamp.map(|t| Season::of_date(t.date_naive())));

        let dominant_planets = match &overrides.dominant_planets {
            Some(planets) => planets.clone(),
            None => snapshot
                .iter()
                .filter(|p| dignity_strength(p, dignity) > 0.0)
                .map(|p| p.planet)
                .chain(hour_ruler)
                .collect(),
        };

        Self {
            timestamp: snapshot.timestamp,
            planets_present: snapshot.len(),
            elemental_profile: aggregate_profile(snapshot, aggregation),
            season,
            lunar_phase,
            moon_illumination,
            hour_ruler,
            dominant_planets,
            zodiac_bodies: zodiac_bodies(snapshot, dignity),
        }
    }
}

/// Sun, Moon and the ruler of the Sun's sign, each counted once.
fn zodiac_bodies(snapshot: &PositionSnapshot, dignity: &DignityWeights) -> Vec<ZodiacBody> {
    let sun_ruler = snapshot
        .sign_of(Planet::Sun)
        .map(|sign| sign.traditional_ruler());

    let mut seen = BTreeSet::new();
    [Some(Planet::Sun), Some(Planet::Moon), sun_ruler]
        .into_iter()
        .flatten()
        .filter(|planet| seen.insert(*planet))
        .filter_map(|planet| {
            let position = snapshot.get(planet)?;
            Some(ZodiacBody {
                planet,
                sign: position.sign?,
                dignity_strength: dignity_strength(position, dignity),
            })
        })
        .collect()
}

/// A method candidate's resolved pillar
#[derive(Debug, Clone, Copy)]
pub struct PillarMatch<'a> {
    pub pillar: &'a AlchemicalPillar,
    pub enrichment: &'a PillarEnrichment,
}

/// A candidate with its score and per-factor breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub name: String,
    pub kind: CandidateKind,
    pub score: f64,
    pub breakdown: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar: Option<PillarEnrichment>,
}

impl ScoredCandidate {
    /// Elemental compatibility contribution, used for tie-breaking
    pub fn elemental_score(&self) -> f64 {
        self.breakdown.get(FACTOR_ELEMENTAL).copied().unwrap_or(0.0)
    }
}

/// Higher score first, then higher elemental score, then name.
pub fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.elemental_score().total_cmp(&a.elemental_score()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Moment profile weighted by the pillar's elemental association
fn pillar_resonance(association: ElementalAssociation, profile: &ElementalProfile) -> f64 {
    match association {
        ElementalAssociation::Neutral => 0.25,
        ElementalAssociation::Pure(element) => profile.get(element),
        ElementalAssociation::Blend { primary, secondary } => {
            PRIMARY_WEIGHT * profile.get(primary) + SECONDARY_WEIGHT * profile.get(secondary)
        }
    }
}

fn zodiac_contribution(
    candidate: &Candidate,
    moment: &MomentContext,
    weights: &ScoringWeights,
) -> f64 {
    let influences = &candidate.astrological_influences;
    moment
        .zodiac_bodies
        .iter()
        .map(|body| {
            let body_weight = (1.0 + weights.dignity_influence * body.dignity_strength).max(0.0);
            let mut delta = 0.0;
            if influences.is_favorable(body.sign) {
                delta += weights.zodiac_favorable_bonus * body_weight;
            }
            if influences.is_unfavorable(body.sign) {
                delta -= weights.zodiac_unfavorable_penalty * body_weight;
            }
            delta
        })
        .sum()
}

/// Score one candidate. Missing metadata contributes nothing.
pub fn score_candidate(
    candidate: &Candidate,
    pillar: Option<PillarMatch<'_>>,
    moment: &MomentContext,
    weights: &ScoringWeights,
) -> ScoredCandidate {
    let influences = &candidate.astrological_influences;
    let mut breakdown = BTreeMap::new();

    breakdown.insert(FACTOR_BASE.to_string(), weights.base);
    breakdown.insert(
        FACTOR_ELEMENTAL.to_string(),
        weights.elemental_weight * candidate.elemental_proportion().dot(&moment.elemental_profile),
    );
    breakdown.insert(
        FACTOR_ZODIAC.to_string(),
        zodiac_contribution(candidate, moment, weights),
    );

    let mut planets: BTreeSet<Planet> = influences.dominant_planets.clone();
    if let Some(m) = pillar {
        planets.extend(m.pillar.planetary_associations.iter().copied());
    }
    let overlap = planets.intersection(&moment.dominant_planets).count();
    breakdown.insert(
        FACTOR_PLANETARY.to_string(),
        weights.dominant_planet_bonus * overlap as f64,
    );

    let seasonal = match moment.season {
        Some(season) if influences.prefers(season) => weights.seasonal_bonus,
        _ => 0.0,
    };
    breakdown.insert(FACTOR_SEASONAL.to_string(), seasonal);

    if let Some(m) = pillar {
        let conditions = &m.enrichment.optimal_conditions;
        breakdown.insert(
            FACTOR_PILLAR.to_string(),
            weights.pillar_weight
                * pillar_resonance(m.pillar.elemental_associations, &moment.elemental_profile),
        );

        let lunar = match moment.lunar_phase {
            Some(phase) if conditions.lunar_phases.contains(phase) => weights.lunar_alignment_bonus,
            _ => 0.0,
        };
        breakdown.insert(FACTOR_LUNAR.to_string(), lunar);

        let hour = match moment.hour_ruler {
            Some(ruler) if conditions.planetary_hours.contains(&ruler) => {
                weights.hour_alignment_bonus
            }
            _ => 0.0,
        };
        breakdown.insert(FACTOR_HOUR.to_string(), hour);
    }

    ScoredCandidate {
        name: candidate.name.clone(),
        kind: candidate.kind,
        score: breakdown.values().sum(),
        breakdown,
        pillar: pillar.map(|m| m.enrichment.clone()),
    }
}
