//! Plant Scorer
//!
//! Combines the five per-dimension credits into one 0-100 match score.
//!
//! | Dimension        | Weight | Rule               |
//! |------------------|--------|--------------------|
//! | pH               | 0.25   | band               |
//! | Temperature      | 0.25   | band               |
//! | Dissolved oxygen | 0.20   | band               |
//! | Ammonia          | 0.10   | ceiling            |
//! | Nitrate          | 0.20   | band               |
//!
//! A sample that sits inside every band earns a 5 point bonus, capped so
//! the score never exceeds 100.

use serde::{Deserialize, Serialize};

use super::band::{band_sub_score, ceiling_sub_score, classify_ceiling, Band, BandFit};
use crate::profile::PlantProfile;
use crate::sample::WaterSample;

pub const PH_WEIGHT: f64 = 0.25;
pub const TEMPERATURE_WEIGHT: f64 = 0.25;
pub const DISSOLVED_OXYGEN_WEIGHT: f64 = 0.20;
pub const AMMONIA_WEIGHT: f64 = 0.10;
pub const NITRATE_WEIGHT: f64 = 0.20;

/// Added when every dimension is in range
pub const PERFECT_MATCH_BONUS: f64 = 5.0;

pub const MAX_SCORE: f64 = 100.0;

/// Water-quality dimension being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Ph,
    Temperature,
    DissolvedOxygen,
    Ammonia,
    Nitrate,
}

impl Dimension {
    pub fn weight(&self) -> f64 {
        match self {
            Dimension::Ph => PH_WEIGHT,
            Dimension::Temperature => TEMPERATURE_WEIGHT,
            Dimension::DissolvedOxygen => DISSOLVED_OXYGEN_WEIGHT,
            Dimension::Ammonia => AMMONIA_WEIGHT,
            Dimension::Nitrate => NITRATE_WEIGHT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Ph => "pH",
            Dimension::Temperature => "Temperature",
            Dimension::DissolvedOxygen => "Dissolved oxygen",
            Dimension::Ammonia => "Ammonia",
            Dimension::Nitrate => "Nitrate",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Dimension::Ph => "",
            Dimension::Temperature => "°C",
            Dimension::DissolvedOxygen | Dimension::Ammonia | Dimension::Nitrate => " mg/L",
        }
    }
}

/// Credit earned on one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,

    /// Measured value from the sample
    pub value: f64,

    /// Lower bound, None for ceiling-only dimensions (ammonia)
    pub min: Option<f64>,

    pub max: f64,

    pub fit: BandFit,

    /// Earned credit, 0 to `max_score`
    pub score: f64,

    /// Dimension weight × 100
    pub max_score: f64,
}

impl DimensionScore {
    fn band(dimension: Dimension, value: f64, band: Band) -> Self {
        Self {
            dimension,
            value,
            min: Some(band.min),
            max: band.max,
            fit: band.classify(value),
            score: band_sub_score(value, band, dimension.weight()),
            max_score: dimension.weight() * 100.0,
        }
    }

    fn ceiling(dimension: Dimension, value: f64, ceiling: f64) -> Self {
        Self {
            dimension,
            value,
            min: None,
            max: ceiling,
            fit: classify_ceiling(value, ceiling),
            score: ceiling_sub_score(value, ceiling, dimension.weight()),
            max_score: dimension.weight() * 100.0,
        }
    }

    pub fn is_within_range(&self) -> bool {
        self.fit == BandFit::WithinRange
    }

    /// E.g. "pH: 8.0 (range 6.0-7.0): Above range, 0.00/25"
    pub fn format_with_context(&self) -> String {
        let range = match self.min {
            Some(min) => format!("{:.1}-{:.1}{}", min, self.max, self.dimension.unit()),
            None => format!("max {:.1}{}", self.max, self.dimension.unit()),
        };
        format!(
            "{}: {:.1}{} (range {}): {}, {:.2}/{:.0}",
            self.dimension.label(),
            self.value,
            self.dimension.unit(),
            range,
            self.fit.display_text(),
            self.score,
            self.max_score
        )
    }
}

/// Full scoring detail for one plant against one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub plant: String,

    /// pH, temperature, dissolved oxygen, ammonia, nitrate
    pub dimensions: Vec<DimensionScore>,

    /// Sum of dimension credits before bonus
    pub raw_total: f64,

    pub bonus_applied: bool,

    /// Final score: clamped to 0-100, 2 decimals
    pub score: f64,
}

impl MatchBreakdown {
    /// Dimensions that fell outside their band
    pub fn misses(&self) -> impl Iterator<Item = &DimensionScore> {
        self.dimensions.iter().filter(|d| !d.is_within_range())
    }
}

/// Score `plant` against `sample` and keep the per-dimension detail
pub fn explain(plant: &PlantProfile, sample: &WaterSample) -> MatchBreakdown {
    let dimensions = vec![
        DimensionScore::band(Dimension::Ph, sample.ph, Band::new(plant.ph_min, plant.ph_max)),
        DimensionScore::band(
            Dimension::Temperature,
            sample.temperature,
            Band::new(plant.temp_min, plant.temp_max),
        ),
        DimensionScore::band(
            Dimension::DissolvedOxygen,
            sample.dissolved_oxygen,
            Band::new(plant.do_min, plant.do_max),
        ),
        DimensionScore::ceiling(Dimension::Ammonia, sample.ammonia, plant.ammonia_max),
        DimensionScore::band(
            Dimension::Nitrate,
            sample.nitrate,
            Band::new(plant.nitrate_min, plant.nitrate_max),
        ),
    ];

    let raw_total: f64 = dimensions.iter().map(|d| d.score).sum();
    let bonus_applied = dimensions.iter().all(DimensionScore::is_within_range);

    let total = if bonus_applied {
        raw_total + PERFECT_MATCH_BONUS
    } else {
        raw_total
    };

    MatchBreakdown {
        plant: plant.name.clone(),
        dimensions,
        raw_total,
        bonus_applied,
        score: round2(total.clamp(0.0, MAX_SCORE)),
    }
}

/// Match score (0-100, 2 decimals) of `plant` for `sample`
pub fn score_plant(plant: &PlantProfile, sample: &WaterSample) -> f64 {
    explain(plant, sample).score
}

/// Round to 2 decimals, judging ties on the exact binary value (ties to even)
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if (scaled - scaled.trunc()).abs() != 0.5 {
        return scaled.round() / 100.0;
    }

    // `scaled` landed on a half; the fused residual says which side the exact product is on
    let residual = value.mul_add(100.0, -scaled);
    let rounded = if residual > 0.0 {
        scaled.ceil()
    } else if residual < 0.0 {
        scaled.floor()
    } else {
        scaled.round_ties_even()
    };
    rounded / 100.0
}
