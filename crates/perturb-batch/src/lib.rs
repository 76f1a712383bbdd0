//! # perturb-batch
//!
//! Ingestion-time batch identity.
//!
//! - `build_row_key`: order-insensitive canonical key of a physical batch row
//! - `build_batch_key`: configurable, coarser key over a subset of fields
//! - `CollisionTracker`: keeps every conflicting value reported under one key
//! - `BatchIngestor`: drives the above over a stream of import rows
//!
//! Nothing here rejects a row. Conflicts come back as data.

pub mod collision;
pub mod ingest;
pub mod key;
pub mod row;

pub use collision::{CollisionRecord, CollisionTracker, RegisterOutcome};
pub use ingest::{BatchIngestor, IngestReport};
pub use key::{build_batch_key, build_row_key, row_key};
pub use row::{ImportRow, SourceToken};
