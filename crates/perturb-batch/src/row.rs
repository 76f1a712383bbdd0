use serde::{Deserialize, Serialize};

/// One perturbed source as written in an import row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceToken {
    /// Source gene name as entered.
    pub base: String,
    /// Experiment type tag, e.g. `MASO` or `MOE`.
    pub experiment_type: String,
}

impl SourceToken {
    pub fn new(base: impl Into<String>, experiment_type: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            experiment_type: experiment_type.into(),
        }
    }
}

/// A raw row handed over by an external CSV or legacy-format reader.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportRow {
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub investigators: Vec<String>,
    pub sources: Vec<SourceToken>,
    #[serde(default)]
    pub batch_id: String,
    pub target: String,
    /// Measured value exactly as written; may be non-numeric (e.g. `NS`).
    pub value: String,
}
