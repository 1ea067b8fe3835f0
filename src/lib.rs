//! Aquafolia Plant Recommender
//!
//! Ranks aquaponic plant species by how well their tolerated water-quality
//! bands match a measured sample (pH, temperature, dissolved oxygen,
//! ammonia, nitrate).
//!
//! Module layout:
//! - `profile`: Plant profiles and on-disk record resolution
//! - `data`: Catalog loading (JSON file or built-in fallback)
//! - `sample`: Water-quality samples and caller-side validation
//! - `matcher`: Weighted band scoring and catalog ranking
//! - `config`: Runtime configuration

pub mod config;
pub mod data;
pub mod default_plants;
pub mod error;
pub mod matcher;
pub mod profile;
pub mod sample;

// Re-export commonly used types
pub use config::RecommenderConfig;
pub use data::{CatalogSource, PlantCatalog};
pub use error::{CatalogError, SampleError};
pub use matcher::{
    explain, recommend, recommend_parallel, score_plant, BandFit, Dimension, DimensionScore,
    MatchBreakdown, ScoredRecommendation, DEFAULT_TOP_N,
};
pub use profile::{PlantProfile, PlantRecord, ProfileDefaults};
pub use sample::WaterSample;
