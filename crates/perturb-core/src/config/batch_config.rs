use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::BatchKeyField;

/// Batch identity configuration used during ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Fields (and their order) that make up the coarse batch key.
    pub key_fields: Vec<BatchKeyField>,
    /// Trim surrounding whitespace from target names and raw values before
    /// comparing them. Key fields are always trimmed.
    pub trim_fields: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            key_fields: defaults::DEFAULT_BATCH_KEY_FIELDS.to_vec(),
            trim_fields: defaults::DEFAULT_TRIM_FIELDS,
        }
    }
}
