use serde::{Deserialize, Serialize};

use super::defaults;

/// Scale conversion configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Absolute tolerance used when checking that a value survives a
    /// fold-change round trip.
    pub round_trip_tolerance: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            round_trip_tolerance: defaults::DEFAULT_ROUND_TRIP_TOLERANCE,
        }
    }
}
