//! Canonical batch identity keys.
//!
//! Two rows that list the same investigators and sources in a different
//! order must land on the same key, so every list is sorted before joining.

use perturb_core::constants::{
    BATCH_KEY_DELIMITER, ROW_KEY_DELIMITER, ROW_KEY_LIST_DELIMITER, SOURCE_TOKEN_SEPARATOR,
};
use perturb_core::errors::BatchError;
use perturb_core::models::BatchKeyField;

use crate::row::{ImportRow, SourceToken};

/// Full identity key of the physical batch a row belongs to.
///
/// Layout: `date, batch_id, time, condition, investigators, sources`
/// joined by `*$*`, list items joined by `*&*`.
pub fn build_row_key(
    sources: &[SourceToken],
    date: &str,
    investigators: &[String],
    time: &str,
    condition: &str,
    batch_id: &str,
) -> String {
    let fields = [
        date.trim().to_string(),
        batch_id.trim().to_string(),
        time.trim().to_string(),
        condition.trim().to_string(),
        sorted_investigators(investigators),
        sorted_source_tokens(sources),
    ];
    fields.join(ROW_KEY_DELIMITER)
}

/// [`build_row_key`] over an [`ImportRow`].
pub fn row_key(row: &ImportRow) -> String {
    build_row_key(
        &row.sources,
        &row.date,
        &row.investigators,
        &row.time,
        &row.condition,
        &row.batch_id,
    )
}

/// Coarse batch key over the chosen fields, in the given order, joined by `::`.
pub fn build_batch_key(fields: &[BatchKeyField], row: &ImportRow) -> Result<String, BatchError> {
    if fields.is_empty() {
        return Err(BatchError::EmptyKeyFields);
    }
    let parts: Vec<String> = fields
        .iter()
        .map(|field| match field {
            BatchKeyField::Date => row.date.trim().to_string(),
            BatchKeyField::Investigators => sorted_investigators(&row.investigators),
            BatchKeyField::BatchId => row.batch_id.trim().to_string(),
            BatchKeyField::Time => row.time.trim().to_string(),
            BatchKeyField::Condition => row.condition.trim().to_string(),
        })
        .collect();
    Ok(parts.join(BATCH_KEY_DELIMITER))
}

/// `base*/*experiment_type` for one source.
pub fn source_token(source: &SourceToken) -> String {
    format!(
        "{}{}{}",
        source.base.trim(),
        SOURCE_TOKEN_SEPARATOR,
        source.experiment_type.trim()
    )
}

fn sorted_investigators(investigators: &[String]) -> String {
    let mut names: Vec<&str> = investigators
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    names.sort_unstable();
    names.join(ROW_KEY_LIST_DELIMITER)
}

fn sorted_source_tokens(sources: &[SourceToken]) -> String {
    let mut tokens: Vec<String> = sources.iter().map(source_token).collect();
    tokens.sort_unstable();
    tokens.join(ROW_KEY_LIST_DELIMITER)
}
