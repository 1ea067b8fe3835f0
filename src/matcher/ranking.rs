//! Catalog Ranking
//!
//! Scores every catalog entry against a sample, drops the non-matches and
//! returns the best `top_n` in descending score order. Ties keep catalog
//! order. Both the sequential and the Rayon path produce the same list.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scorer::{explain, score_plant, MatchBreakdown};
use crate::data::PlantCatalog;
use crate::profile::PlantProfile;
use crate::sample::WaterSample;

/// Number of results returned when the caller gives no limit
pub const DEFAULT_TOP_N: usize = 10;

/// One ranked plant with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    #[serde(flatten)]
    pub plant: PlantProfile,

    /// 0-100, 2 decimals
    pub match_score: f64,
}

impl ScoredRecommendation {
    /// Per-dimension detail behind `match_score`, from the ranked profile itself
    pub fn explain(&self, sample: &WaterSample) -> MatchBreakdown {
        explain(&self.plant, sample)
    }
}

/// Rank `catalog` against `sample`, best first
pub fn recommend(
    catalog: &PlantCatalog,
    sample: &WaterSample,
    top_n: usize,
) -> Vec<ScoredRecommendation> {
    let scored: Vec<(&PlantProfile, f64)> = catalog
        .all()
        .iter()
        .map(|plant| (plant, score_plant(plant, sample)))
        .collect();

    rank(scored, top_n)
}

/// Same as [`recommend`], scoring plants on the Rayon pool
pub fn recommend_parallel(
    catalog: &PlantCatalog,
    sample: &WaterSample,
    top_n: usize,
) -> Vec<ScoredRecommendation> {
    // collect() on an indexed parallel iterator keeps catalog order
    let scored: Vec<(&PlantProfile, f64)> = catalog
        .all()
        .par_iter()
        .map(|plant| (plant, score_plant(plant, sample)))
        .collect();

    rank(scored, top_n)
}

fn rank(scored: Vec<(&PlantProfile, f64)>, top_n: usize) -> Vec<ScoredRecommendation> {
    let total = scored.len();

    let mut matches: Vec<(&PlantProfile, f64)> =
        scored.into_iter().filter(|(_, score)| *score > 0.0).collect();

    // sort_by is stable: equal scores stay in catalog order
    matches.sort_by(|a, b| b.1.total_cmp(&a.1));

    debug!(
        "Ranked {} plants: {} matched, returning up to {}",
        total,
        matches.len(),
        top_n
    );

    matches
        .into_iter()
        .take(top_n)
        .map(|(plant, match_score)| ScoredRecommendation {
            plant: plant.clone(),
            match_score,
        })
        .collect()
}
