use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scale::MeasurementScale;
use super::technology::PertTechnology;

/// A mutation made by the core, handed to the caller's transaction log.
///
/// Edits carry both states so the log can be replayed in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    ScaleAdded {
        scale: MeasurementScale,
    },
    ScaleEdited {
        before: MeasurementScale,
        after: MeasurementScale,
    },
    ScaleRemoved {
        scale: MeasurementScale,
    },
    TechnologyAdded {
        technology: PertTechnology,
    },
    TechnologyEdited {
        before: PertTechnology,
        after: PertTechnology,
    },
    TechnologyRemoved {
        technology: PertTechnology,
    },
    BatchRegistered {
        batch_key: String,
        target: String,
        value: String,
    },
    CollisionRecorded {
        batch_key: String,
        target: String,
        value: String,
    },
}

/// A timestamped [`Change`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub at: DateTime<Utc>,
    pub change: Change,
}

impl ChangeRecord {
    pub fn now(change: Change) -> Self {
        Self {
            at: Utc::now(),
            change,
        }
    }
}
