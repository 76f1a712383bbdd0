//! Drives key building and collision tracking over a stream of import rows.

use std::collections::{BTreeMap, BTreeSet};

use perturb_core::config::BatchConfig;
use perturb_core::errors::BatchError;
use perturb_core::traits::ChangeSink;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::collision::{parse_finite, CollisionRecord, CollisionTracker, RegisterOutcome};
use crate::key::{build_batch_key, row_key, source_token};
use crate::row::ImportRow;

/// Summary of one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestReport {
    pub rows: usize,
    /// Distinct full row keys seen.
    pub batches: usize,
    pub duplicates: usize,
    /// Rows whose value is not a number (e.g. `NS`). They are still
    /// registered and compared as text.
    pub unparsed_values: usize,
    /// Row keys grouped under the configured coarse batch key.
    pub batch_groups: BTreeMap<String, BTreeSet<String>>,
    pub collisions: Vec<CollisionRecord>,
}

/// Sequential ingestor. Callers that ingest in parallel must serialize
/// calls to [`BatchIngestor::ingest`].
#[derive(Debug)]
pub struct BatchIngestor {
    config: BatchConfig,
    tracker: CollisionTracker,
    rows: usize,
    duplicates: usize,
    unparsed_values: usize,
    batch_groups: BTreeMap<String, BTreeSet<String>>,
}

impl BatchIngestor {
    pub fn new(config: BatchConfig) -> Result<Self, BatchError> {
        if config.key_fields.is_empty() {
            return Err(BatchError::EmptyKeyFields);
        }
        Ok(Self {
            config,
            tracker: CollisionTracker::new(),
            rows: 0,
            duplicates: 0,
            unparsed_values: 0,
            batch_groups: BTreeMap::new(),
        })
    }

    pub fn ingest(&mut self, row: &ImportRow, sink: &mut dyn ChangeSink) -> RegisterOutcome {
        self.rows += 1;
        let key = row_key(row);
        // Key fields were checked non-empty in `new`.
        if let Ok(coarse) = build_batch_key(&self.config.key_fields, row) {
            self.batch_groups
                .entry(coarse)
                .or_default()
                .insert(key.clone());
        }

        let (target, value) = if self.config.trim_fields {
            (row.target.trim(), row.value.trim())
        } else {
            (row.target.as_str(), row.value.as_str())
        };
        if parse_finite(value).is_none() {
            debug!(target_key = target, value, "non-numeric value");
            self.unparsed_values += 1;
        }
        let outcome = self
            .tracker
            .register(&key, target, value, &describe(row), sink);
        if outcome == RegisterOutcome::Duplicate {
            self.duplicates += 1;
        }
        outcome
    }

    pub fn ingest_all<'a, I>(&mut self, rows: I, sink: &mut dyn ChangeSink)
    where
        I: IntoIterator<Item = &'a ImportRow>,
    {
        for row in rows {
            self.ingest(row, sink);
        }
    }

    pub fn tracker(&self) -> &CollisionTracker {
        &self.tracker
    }

    pub fn finish(self) -> IngestReport {
        let batches = self
            .batch_groups
            .values()
            .map(BTreeSet::len)
            .sum::<usize>();
        let report = IngestReport {
            rows: self.rows,
            batches,
            duplicates: self.duplicates,
            unparsed_values: self.unparsed_values,
            batch_groups: self.batch_groups,
            collisions: self.tracker.into_collisions(),
        };
        info!(
            rows = report.rows,
            batches = report.batches,
            duplicates = report.duplicates,
            collisions = report.collisions.len(),
            "ingestion complete"
        );
        report
    }
}

/// Human-readable batch description for collision reports.
fn describe(row: &ImportRow) -> String {
    let mut sources: Vec<String> = row.sources.iter().map(source_token).collect();
    sources.sort_unstable();
    let time = match row.time.trim() {
        "" => "none",
        t => t,
    };
    format!(
        "{} time {} condition {} batch {} sources {}",
        row.date.trim(),
        time,
        row.condition.trim(),
        row.batch_id.trim(),
        sources.join(", ")
    )
}
