//! Catalog Loading
//!
//! Loads plant profiles from a JSON catalog file. A missing file is not an
//! error: the built-in species list is used instead. A file that exists
//! but cannot be read or parsed fails the load, so partial data never
//! reaches the scorer.
//!
//! The catalog is built once and then only read; callers hold it by value
//! or behind an `Arc` and pass it to the matcher by reference.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::default_plants::fallback_plants;
use crate::error::CatalogError;
use crate::profile::{PlantProfile, PlantRecord, ProfileDefaults};

/// Where the catalog's profiles came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from a catalog file
    File(PathBuf),
    /// Built-in species list
    Fallback,
    /// Built directly from records supplied by the caller
    Inline,
}

/// Immutable collection of plant profiles
#[derive(Debug, Clone)]
pub struct PlantCatalog {
    plants: Vec<PlantProfile>,

    /// Plant name → index into `plants` (first occurrence wins)
    by_name: FxHashMap<String, usize>,

    source: CatalogSource,
}

impl PlantCatalog {
    /// Load the catalog from `path`, or the built-in list if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("Catalog file {:?} not found, using built-in plants", path);
                return Ok(Self::fallback());
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let records: Vec<PlantRecord> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut catalog = Self::from_records(records, &ProfileDefaults::default());
        catalog.source = CatalogSource::File(path.to_path_buf());
        info!("Loaded {} plants from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Built-in catalog of 15 species
    pub fn fallback() -> Self {
        Self::new(fallback_plants(), CatalogSource::Fallback)
    }

    /// Build a catalog from already-parsed records
    pub fn from_records(records: Vec<PlantRecord>, defaults: &ProfileDefaults) -> Self {
        let plants = records
            .into_iter()
            .map(|r| PlantProfile::from_record(r, defaults))
            .collect();
        Self::new(plants, CatalogSource::Inline)
    }

    fn new(plants: Vec<PlantProfile>, source: CatalogSource) -> Self {
        let mut by_name = FxHashMap::default();

        for (idx, plant) in plants.iter().enumerate() {
            let inverted = plant.inverted_bands();
            if !inverted.is_empty() {
                warn!(
                    "Plant '{}' has inverted bands ({}); they will never match",
                    plant.name,
                    inverted.join(", ")
                );
            }
            by_name.entry(plant.name.clone()).or_insert(idx);
        }

        Self {
            plants,
            by_name,
            source,
        }
    }

    /// Every profile, in load order
    pub fn all(&self) -> &[PlantProfile] {
        &self.plants
    }

    /// Look up a profile by exact name
    pub fn find(&self, name: &str) -> Option<&PlantProfile> {
        self.by_name.get(name).map(|&idx| &self.plants[idx])
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_PLANTS: &str = r#"[
        {
            "name": "Lettuce", "type": "Leafy Green",
            "ph_min": 6.0, "ph_max": 7.0,
            "temp_min": 15, "temp_max": 20,
            "do_min": 5.0, "do_max": 8.0
        },
        {
            "name": "Tomato", "type": "Fruit Vegetable",
            "ph_min": 5.5, "ph_max": 6.5,
            "temp_min": 18, "temp_max": 24,
            "do_min": 6.0, "do_max": 8.0,
            "ammonia_max": 0.5, "nitrate_min": 100, "nitrate_max": 300,
            "description": "Popular aquaponic crop."
        }
    ]"#;

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = PlantCatalog::load(dir.path().join("plants_database.json")).unwrap();

        assert_eq!(catalog.all().len(), 15);
        assert_eq!(catalog.source(), &CatalogSource::Fallback);
        assert_eq!(catalog.all()[0].name, "Lettuce");
    }

    #[test]
    fn test_load_from_file_keeps_order_and_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_PLANTS.as_bytes()).unwrap();

        let catalog = PlantCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].name, "Lettuce");
        assert_eq!(catalog.all()[1].name, "Tomato");
        assert_eq!(catalog.all()[0].nitrate_max, 400.0);
        assert_eq!(catalog.all()[1].nitrate_max, 300.0);
        assert!(matches!(catalog.source(), CatalogSource::File(_)));
    }

    #[test]
    fn test_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"name\": \"Lettuce\", \"ph_min\": ").unwrap();

        let err = PlantCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "Lettuce", "type": "Leafy Green", "ph_min": 6.0}]"#)
            .unwrap();

        let err = PlantCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_record_without_category_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"name": "Lettuce", "ph_min": 6.0, "ph_max": 7.0,
                  "temp_min": 15, "temp_max": 20, "do_min": 5.0, "do_max": 8.0}]"#,
        )
        .unwrap();

        let catalog = PlantCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].category, "");
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlantCatalog::load(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_find_by_name() {
        let catalog = PlantCatalog::fallback();
        assert_eq!(catalog.find("Watercress").unwrap().category, "Aquatic Plant");
        assert!(catalog.find("watercress").is_none());
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let records: Vec<PlantRecord> = serde_json::from_str(
            r#"[
                {"name": "Mint", "type": "Herb", "ph_min": 6.0, "ph_max": 7.0,
                 "temp_min": 15, "temp_max": 22, "do_min": 4.0, "do_max": 6.0},
                {"name": "Mint", "type": "Other", "ph_min": 6.0, "ph_max": 7.0,
                 "temp_min": 15, "temp_max": 22, "do_min": 4.0, "do_max": 6.0}
            ]"#,
        )
        .unwrap();

        let catalog = PlantCatalog::from_records(records, &ProfileDefaults::default());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("Mint").unwrap().category, "Herb");
        assert_eq!(catalog.source(), &CatalogSource::Inline);
    }
}
