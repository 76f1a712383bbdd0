// Single source of truth for all default values.

use crate::models::BatchKeyField;

// --- Scale ---
pub const DEFAULT_ROUND_TRIP_TOLERANCE: f64 = 1e-9;

// --- Batch ---
pub const DEFAULT_BATCH_KEY_FIELDS: [BatchKeyField; 5] = BatchKeyField::ALL;
pub const DEFAULT_TRIM_FIELDS: bool = true;

// --- Filter ---
pub const DEFAULT_MAX_FILTER_DEPTH: usize = 64;
