//! Runtime configuration
//!
//! Environment variables:
//! - `AQUAFOLIA_CATALOG`: catalog file path (default `plants_database.json`)
//! - `AQUAFOLIA_TOP_N`: default number of recommendations (default 10)

use std::path::PathBuf;

use tracing::warn;

use crate::matcher::DEFAULT_TOP_N;

pub const CATALOG_ENV: &str = "AQUAFOLIA_CATALOG";
pub const TOP_N_ENV: &str = "AQUAFOLIA_TOP_N";
pub const DEFAULT_CATALOG_PATH: &str = "plants_database.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommenderConfig {
    pub catalog_path: PathBuf,
    pub top_n: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RecommenderConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unparsable values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup(CATALOG_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let top_n = match lookup(TOP_N_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid {}={:?}, using {}", TOP_N_ENV, raw, defaults.top_n);
                defaults.top_n
            }),
            None => defaults.top_n,
        };

        Self {
            catalog_path,
            top_n,
        }
    }
}
