//! Navigator configuration
//!
//! Loaded from YAML, every field optional:
//!
//! ```yaml
//! transfer_tag: elevation
//! cost_metric: squared_euclidean   # or: euclidean
//! ```

use crate::graph::Tag;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use wayfinder_algorithms::Metric;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for route planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Tag marking vertical-transfer nodes (elevators, stairs)
    pub transfer_tag: Tag,
    /// Edge cost and heuristic metric. `euclidean` trades the default
    /// squared distance for true shortest paths.
    pub cost_metric: Metric,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            transfer_tag: Tag::elevation(),
            cost_metric: Metric::SquaredEuclidean,
        }
    }
}

impl NavigatorConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
