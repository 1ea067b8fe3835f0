//! Water-Quality Matcher
//!
//! Scores how well a water sample suits a plant and ranks the catalog.
//!
//! ## Architecture
//! - `band.rs` - Per-dimension band and ceiling credits
//! - `scorer.rs` - Weighted total, perfect-match bonus, breakdown
//! - `ranking.rs` - Catalog-wide scoring, filtering and ordering

pub mod band;
pub mod ranking;
pub mod scorer;

// Re-export public API
pub use band::{band_sub_score, ceiling_sub_score, Band, BandFit};
pub use ranking::{recommend, recommend_parallel, ScoredRecommendation, DEFAULT_TOP_N};
pub use scorer::{explain, score_plant, Dimension, DimensionScore, MatchBreakdown};
