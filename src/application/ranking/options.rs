//! Ranking Options
//!
//! Configuration types for a ranking pass.

use std::collections::BTreeSet;

use crate::config::EngineConfig;
use crate::domain::entities::Candidate;
use crate::domain::services::{AggregationMode, DignityWeights, MomentOverrides, ScoringWeights};
use crate::domain::value_objects::{Planet, Season, Tag};

/// Hard filters applied before scoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingFilters {
    /// Candidates must carry every one of these tags
    pub required_tags: BTreeSet<Tag>,
    /// Candidates carrying any of these tags are dropped
    pub excluded_tags: BTreeSet<Tag>,
    /// When set, candidates needing a tool outside this set are dropped
    pub available_tools: Option<BTreeSet<Tag>>,
}

impl RankingFilters {
    pub fn require<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.required_tags.extend(tags.into_iter().map(Tag::new));
        self
    }

    pub fn exclude<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.excluded_tags.extend(tags.into_iter().map(Tag::new));
        self
    }

    pub fn with_tools<I, T>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.available_tools = Some(tools.into_iter().map(Tag::new).collect());
        self
    }

    /// Whether a candidate survives the filters
    pub fn admits(&self, candidate: &Candidate) -> bool {
        let has_required = self.required_tags.iter().all(|t| candidate.has_tag(t));
        let has_excluded = self.excluded_tags.iter().any(|t| candidate.has_tag(t));
        let tools_ok = match &self.available_tools {
            Some(tools) => candidate.required_tools.is_subset(tools),
            None => true,
        };
        has_required && !has_excluded && tools_ok
    }
}

/// Options for the ranking use case
#[derive(Debug, Clone, Default)]
pub struct RankingOptions {
    pub weights: ScoringWeights,
    pub dignity: DignityWeights,
    pub aggregation: AggregationMode,
    pub overrides: MomentOverrides,
    pub filters: RankingFilters,
    /// Keep only the top N after sorting
    pub limit: Option<usize>,
}

impl RankingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the weights and aggregation mode from configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            weights: config.scoring,
            dignity: config.dignity,
            aggregation: config.aggregation.mode,
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_aggregation(mut self, aggregation: AggregationMode) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.overrides.season = Some(season);
        self
    }

    pub fn with_dominant_planets(mut self, planets: impl IntoIterator<Item = Planet>) -> Self {
        self.overrides.dominant_planets = Some(planets.into_iter().collect());
        self
    }

    pub fn with_filters(mut self, filters: RankingFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
