use serde::{Deserialize, Serialize};

use super::defaults;

/// Filter evaluation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Maximum nesting depth of a filter expression tree.
    pub max_depth: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_FILTER_DEPTH,
        }
    }
}
