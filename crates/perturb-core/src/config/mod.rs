//! Configuration for the perturbation evidence core.
//!
//! Every section is `#[serde(default)]`, so a partial (or empty) TOML
//! document yields a complete config.

mod batch_config;
pub mod defaults;
mod filter_config;
mod scale_config;

pub use batch_config::BatchConfig;
pub use filter_config::FilterConfig;
pub use scale_config::ScaleConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{PerturbError, PerturbResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerturbConfig {
    pub scale: ScaleConfig,
    pub batch: BatchConfig,
    pub filter: FilterConfig,
}

impl PerturbConfig {
    /// Parse a config from TOML text. Missing sections and fields take defaults.
    pub fn from_toml(text: &str) -> PerturbResult<Self> {
        toml::from_str(text).map_err(|e| PerturbError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Render the config as TOML.
    pub fn to_toml(&self) -> PerturbResult<String> {
        toml::to_string(self).map_err(|e| PerturbError::ConfigError {
            reason: e.to_string(),
        })
    }
}
