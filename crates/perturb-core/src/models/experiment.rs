use std::fmt;

use serde::{Deserialize, Serialize};

use super::source::{PertSource, PertSources};
use crate::errors::RecordError;

/// When an experiment was measured.
///
/// `time == None` means the experiment has no specific time point. Legacy
/// data may carry a maximum time, making the span the closed interval
/// `[time, legacy_max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeSpanRepr", into = "TimeSpanRepr")]
pub struct TimeSpan {
    time: Option<i32>,
    legacy_max: Option<i32>,
}

#[derive(Serialize, Deserialize)]
struct TimeSpanRepr {
    #[serde(default)]
    time: Option<i32>,
    #[serde(default)]
    legacy_max: Option<i32>,
}

impl TimeSpan {
    pub fn new(time: Option<i32>, legacy_max: Option<i32>) -> Result<Self, RecordError> {
        match (time, legacy_max) {
            (None, Some(legacy_max)) => Err(RecordError::LegacyMaxWithoutTime { legacy_max }),
            (Some(time), Some(legacy_max)) if legacy_max < time => {
                Err(RecordError::InvalidTimeSpan { time, legacy_max })
            }
            _ => Ok(Self { time, legacy_max }),
        }
    }

    /// No specific time point.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn point(time: i32) -> Self {
        Self {
            time: Some(time),
            legacy_max: None,
        }
    }

    pub fn time(&self) -> Option<i32> {
        self.time
    }

    pub fn legacy_max(&self) -> Option<i32> {
        self.legacy_max
    }

    pub fn is_none(&self) -> bool {
        self.time.is_none()
    }

    /// Closed `(min, max)` bounds; a single point has `min == max`.
    pub fn bounds(&self) -> Option<(i32, i32)> {
        self.time.map(|t| (t, self.legacy_max.unwrap_or(t)))
    }

    /// True when this span shares at least one instant with `[min, max]`.
    pub fn overlaps(&self, min: i32, max: i32) -> bool {
        match self.bounds() {
            Some((lo, hi)) => lo <= max && min <= hi,
            None => false,
        }
    }
}

impl TryFrom<TimeSpanRepr> for TimeSpan {
    type Error = RecordError;

    fn try_from(repr: TimeSpanRepr) -> Result<Self, Self::Error> {
        Self::new(repr.time, repr.legacy_max)
    }
}

impl From<TimeSpan> for TimeSpanRepr {
    fn from(span: TimeSpan) -> Self {
        Self {
            time: span.time,
            legacy_max: span.legacy_max,
        }
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.time, self.legacy_max) {
            (None, _) => f.write_str("none"),
            (Some(t), None) => write!(f, "{t}"),
            (Some(t), Some(max)) => write!(f, "{t}-{max}"),
        }
    }
}

/// One perturbation experiment: what was perturbed, when, under which
/// condition and by whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub id: String,
    sources: PertSources,
    #[serde(default)]
    time: TimeSpan,
    condition_key: String,
    #[serde(default)]
    investigators: Vec<String>,
}

impl ExperimentRecord {
    pub fn new(
        id: impl Into<String>,
        sources: PertSources,
        time: TimeSpan,
        condition_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sources,
            time,
            condition_key: condition_key.into(),
            investigators: Vec::new(),
        }
    }

    pub fn with_investigators<I, S>(mut self, investigators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.investigators = investigators.into_iter().map(Into::into).collect();
        self
    }

    pub fn sources(&self) -> &PertSources {
        &self.sources
    }

    pub fn time(&self) -> TimeSpan {
        self.time
    }

    /// The time span as shown to users: `none`, `5` or `10-20`.
    pub fn display_time(&self) -> String {
        self.time.to_string()
    }

    pub fn condition_key(&self) -> &str {
        &self.condition_key
    }

    pub fn investigators(&self) -> &[String] {
        &self.investigators
    }

    pub fn set_sources(&mut self, sources: Vec<PertSource>) -> Result<(), RecordError> {
        self.sources = PertSources::new(sources)?;
        Ok(())
    }

    pub fn set_time(&mut self, time: Option<i32>, legacy_max: Option<i32>) -> Result<(), RecordError> {
        self.time = TimeSpan::new(time, legacy_max)?;
        Ok(())
    }

    pub fn set_condition(&mut self, condition_key: impl Into<String>) {
        self.condition_key = condition_key.into();
    }

    pub fn set_investigators(&mut self, investigators: Vec<String>) {
        self.investigators = investigators;
    }

    /// Equality ignoring the record id, used to spot duplicate imports.
    /// Source and investigator order do not matter.
    pub fn equals_minus_id(&self, other: &Self) -> bool {
        if self.time != other.time || self.condition_key != other.condition_key {
            return false;
        }
        let mut mine: Vec<&String> = self.investigators.iter().collect();
        let mut theirs: Vec<&String> = other.investigators.iter().collect();
        mine.sort();
        theirs.sort();
        mine == theirs && self.sources.same_sources(&other.sources)
    }
}
