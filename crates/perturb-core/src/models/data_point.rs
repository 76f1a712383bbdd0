use serde::{Deserialize, Serialize};

/// One measured value for a target gene within an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PertDataPoint {
    pub id: String,
    pub experiment_key: String,
    pub target_key: String,
    /// Value on the scale of the measurement technology.
    pub value: f64,
    pub measure_key: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Significance call made by the investigator, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_significant: Option<bool>,
}

impl PertDataPoint {
    pub fn new(
        id: impl Into<String>,
        experiment_key: impl Into<String>,
        target_key: impl Into<String>,
        value: f64,
        measure_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            experiment_key: experiment_key.into(),
            target_key: target_key.into(),
            value,
            measure_key: measure_key.into(),
            annotations: Vec::new(),
            is_significant: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}
