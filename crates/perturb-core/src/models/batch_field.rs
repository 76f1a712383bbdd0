use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BatchError;

/// A field that may participate in a configurable batch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchKeyField {
    Date,
    Investigators,
    BatchId,
    Time,
    Condition,
}

impl BatchKeyField {
    pub const ALL: [BatchKeyField; 5] = [
        Self::Date,
        Self::Investigators,
        Self::BatchId,
        Self::Time,
        Self::Condition,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Investigators => "investigators",
            Self::BatchId => "batch_id",
            Self::Time => "time",
            Self::Condition => "condition",
        }
    }
}

impl fmt::Display for BatchKeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchKeyField {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BatchError::UnknownKeyField {
                name: s.to_string(),
            })
    }
}
