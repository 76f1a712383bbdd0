//! Conflicting values reported for the same target within one batch.

use std::collections::HashMap;

use perturb_core::models::Change;
use perturb_core::traits::ChangeSink;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Every value seen for one target under one batch key, once they disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionRecord {
    pub batch_key: String,
    /// Human-readable description of the batch.
    pub description: String,
    pub target: String,
    /// Distinct raw values, in the order they were first seen.
    pub values: Vec<String>,
}

/// What happened when a value was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// First value for this target in this batch.
    New,
    /// Same value as one already recorded.
    Duplicate,
    /// A different value; it was added to the batch's collision record.
    Collision,
}

/// Tracks values per `(batch key, target)` and accumulates collisions.
///
/// Registration is append-only: earlier values are never overwritten.
/// Assumes sequential ingestion.
#[derive(Debug, Default)]
pub struct CollisionTracker {
    seen: HashMap<(String, String), Vec<String>>,
    collisions: Vec<CollisionRecord>,
    collision_index: HashMap<(String, String), usize>,
}

impl CollisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        batch_key: &str,
        target: &str,
        value: &str,
        description: &str,
        sink: &mut dyn ChangeSink,
    ) -> RegisterOutcome {
        let slot = (batch_key.to_string(), target.to_string());
        let Some(values) = self.seen.get_mut(&slot) else {
            debug!(batch_key, target_key = target, value, "batch value registered");
            sink.emit(Change::BatchRegistered {
                batch_key: batch_key.to_string(),
                target: target.to_string(),
                value: value.to_string(),
            });
            self.seen.insert(slot, vec![value.to_string()]);
            return RegisterOutcome::New;
        };

        if values.iter().any(|v| same_value(v, value)) {
            return RegisterOutcome::Duplicate;
        }
        values.push(value.to_string());

        warn!(batch_key, target_key = target, value, "conflicting value for target in batch");
        sink.emit(Change::CollisionRecorded {
            batch_key: batch_key.to_string(),
            target: target.to_string(),
            value: value.to_string(),
        });
        match self.collision_index.get(&slot) {
            Some(&idx) => self.collisions[idx].values.push(value.to_string()),
            None => {
                self.collision_index.insert(slot, self.collisions.len());
                self.collisions.push(CollisionRecord {
                    batch_key: batch_key.to_string(),
                    description: description.to_string(),
                    target: target.to_string(),
                    values: values.clone(),
                });
            }
        }
        RegisterOutcome::Collision
    }

    /// Collision records in the order they were first detected.
    pub fn collisions(&self) -> &[CollisionRecord] {
        &self.collisions
    }

    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }

    /// Values recorded so far for a target in a batch.
    pub fn values(&self, batch_key: &str, target: &str) -> Option<&[String]> {
        self.seen
            .get(&(batch_key.to_string(), target.to_string()))
            .map(Vec::as_slice)
    }

    /// Number of distinct `(batch key, target)` slots seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn into_collisions(self) -> Vec<CollisionRecord> {
        self.collisions
    }
}

/// Finite numeric values compare as numbers (`2.5` equals `2.50`); anything
/// else, including `NaN` and `inf`, compares as text, ignoring ASCII case.
pub fn same_value(a: &str, b: &str) -> bool {
    match (parse_finite(a), parse_finite(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}

/// The value as a finite number, if it is one.
pub fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_compare_numerically() {
        assert!(same_value("2.5", "2.50"));
        assert!(same_value(" -3 ", "-3.0"));
        assert!(!same_value("2.5", "3.1"));
    }

    #[test]
    fn non_finite_spellings_compare_as_text() {
        assert!(same_value("NaN", "nan"));
        assert!(same_value("inf", "INF"));
        assert!(!same_value("inf", "infinity"));
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite(" 2.5 "), Some(2.5));
    }

    #[test]
    fn text_values_compare_case_insensitively() {
        assert!(same_value("NS", "ns"));
        assert!(!same_value("NS", "2.5"));
    }
}
