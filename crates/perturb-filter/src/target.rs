//! Seams between the algebra and the records it filters.

use perturb_core::errors::FilterError;
use perturb_core::models::{ExperimentRecord, MeasureProps, MeasurementScale, PertTechnology};

use crate::filter::PertFilter;

/// Read-only lookups an entity needs to answer delegated categories.
///
/// The caller guarantees the catalog is a consistent snapshot for the
/// duration of one evaluation.
pub trait EvidenceCatalog {
    fn experiment(&self, id: &str) -> Option<&ExperimentRecord>;
    fn measure_props(&self, id: &str) -> Option<&MeasureProps>;
    fn scale(&self, id: &str) -> Option<&MeasurementScale>;
    fn technology(&self, id: &str) -> Option<&PertTechnology>;
}

/// A record that can answer an atomic filter.
///
/// Implementations answer by comparing their own fields, by delegating to a
/// referenced record, or with `Ok(true)` for categories they have no
/// opinion on.
pub trait FilterTarget {
    fn matches(&self, filter: &PertFilter, catalog: &dyn EvidenceCatalog)
        -> Result<bool, FilterError>;
}

/// Answers filters for the entities behind a domain of ids.
pub trait EntitySource {
    fn matches(&self, id: &str, filter: &PertFilter) -> Result<bool, FilterError>;
}

pub(crate) fn missing(kind: &str, id: &str) -> FilterError {
    FilterError::MissingEntity {
        kind: kind.to_string(),
        id: id.to_string(),
    }
}
