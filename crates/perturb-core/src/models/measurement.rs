use serde::{Deserialize, Serialize};

/// A measurement technology (e.g. QPCR, WMISH) and the scale it reports on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureProps {
    pub id: String,
    pub name: String,
    /// Key of the [`MeasurementScale`](super::MeasurementScale) values are written in.
    pub scale_key: String,
}

impl MeasureProps {
    pub fn new(id: impl Into<String>, name: impl Into<String>, scale_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scale_key: scale_key.into(),
        }
    }
}
