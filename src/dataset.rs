//! Dataset definitions
//!
//! A dataset is a named list of block names used to scope exports. The
//! configuration is a JSON document:
//!
//! ```json
//! {
//!   "datasets": {
//!     "every-day": ["Basic Latin", "Arrows"],
//!     "complete": ["all"]
//!   }
//! }
//! ```
//!
//! When no configuration can be loaded, [`DatasetConfig::default`] applies,
//! under which every dataset is unfiltered.

use crate::error::ConfigError;
use crate::filter::ALL_BLOCKS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Common blocks only
pub const DATASET_EVERYDAY: &str = "every-day";
/// Every block
pub const DATASET_COMPLETE: &str = "complete";

/// Curated configuration shipped with the crate
pub const BUNDLED_CONFIG: &str = include_str!("../data/datasets.json");

/// Named block lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset name to block names
    #[serde(default)]
    pub datasets: BTreeMap<String, Vec<String>>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        let mut datasets = BTreeMap::new();
        datasets.insert(DATASET_EVERYDAY.to_string(), Vec::new());
        datasets.insert(DATASET_COMPLETE.to_string(), vec![ALL_BLOCKS.to_string()]);
        Self { datasets }
    }
}

impl DatasetConfig {
    /// Parse a configuration document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Like [`DatasetConfig::load`], falling back to the default on failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log_warn!(
                    "using default dataset configuration, {} unusable: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// The configuration bundled with the crate
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_CONFIG).unwrap_or_default()
    }

    /// Block list of a dataset, `None` if it is not defined
    pub fn blocks(&self, dataset: &str) -> Option<&[String]> {
        self.datasets.get(dataset).map(Vec::as_slice)
    }

    /// Defined dataset names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }
}
