//! Plant profiles
//!
//! `PlantRecord` mirrors the catalog file, where the category, the ammonia
//! ceiling, the nitrate band and the description may be omitted. Records are resolved
//! into `PlantProfile` once, at load time, against `ProfileDefaults`.

use serde::{Deserialize, Serialize};

/// Values substituted for optional record fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDefaults {
    /// Ammonia tolerance ceiling (mg/L)
    pub ammonia_max: f64,
    /// Lower nitrate bound (mg/L)
    pub nitrate_min: f64,
    /// Upper nitrate bound (mg/L)
    pub nitrate_max: f64,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            ammonia_max: 0.5,
            nitrate_min: 50.0,
            nitrate_max: 400.0,
        }
    }
}

/// One plant entry as it appears in the catalog file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlantRecord {
    pub name: String,
    #[serde(alias = "type", default)]
    pub category: String,
    pub ph_min: f64,
    pub ph_max: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub do_min: f64,
    pub do_max: f64,
    #[serde(default)]
    pub ammonia_max: Option<f64>,
    #[serde(default)]
    pub nitrate_min: Option<f64>,
    #[serde(default)]
    pub nitrate_max: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Acceptable water-quality bands for one species
///
/// All bands are inclusive. Bands are expected to satisfy min <= max but
/// this is not enforced; an inverted band simply never matches.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlantProfile {
    pub name: String,
    pub category: String,
    pub ph_min: f64,
    pub ph_max: f64,
    /// °C
    pub temp_min: f64,
    pub temp_max: f64,
    /// Dissolved oxygen, mg/L
    pub do_min: f64,
    pub do_max: f64,
    /// mg/L
    pub ammonia_max: f64,
    /// mg/L
    pub nitrate_min: f64,
    pub nitrate_max: f64,
    pub description: String,
}

impl PlantProfile {
    /// Resolve a catalog record, filling absent fields from `defaults`
    pub fn from_record(record: PlantRecord, defaults: &ProfileDefaults) -> Self {
        Self {
            name: record.name,
            category: record.category,
            ph_min: record.ph_min,
            ph_max: record.ph_max,
            temp_min: record.temp_min,
            temp_max: record.temp_max,
            do_min: record.do_min,
            do_max: record.do_max,
            ammonia_max: record.ammonia_max.unwrap_or(defaults.ammonia_max),
            nitrate_min: record.nitrate_min.unwrap_or(defaults.nitrate_min),
            nitrate_max: record.nitrate_max.unwrap_or(defaults.nitrate_max),
            description: record.description.unwrap_or_default(),
        }
    }

    /// Names of the bands whose min exceeds their max
    pub fn inverted_bands(&self) -> Vec<&'static str> {
        [
            ("ph", self.ph_min, self.ph_max),
            ("temperature", self.temp_min, self.temp_max),
            ("dissolved_oxygen", self.do_min, self.do_max),
            ("nitrate", self.nitrate_min, self.nitrate_max),
        ]
        .into_iter()
        .filter(|(_, min, max)| min > max)
        .map(|(label, _, _)| label)
        .collect()
    }
}
