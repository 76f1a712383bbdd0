use perturb_core::errors::FilterError;
use perturb_core::models::ExperimentRecord;

use crate::category::FilterCategory;
use crate::filter::PertFilter;
use crate::target::{EvidenceCatalog, FilterTarget};

impl FilterTarget for ExperimentRecord {
    fn matches(
        &self,
        filter: &PertFilter,
        catalog: &dyn EvidenceCatalog,
    ) -> Result<bool, FilterError> {
        let matched = match filter.category {
            FilterCategory::Experiment => self.id == filter.expect_key()?,
            FilterCategory::Time => {
                let (min, max) = filter.expect_time_range()?;
                self.time().overlaps(min, max)
            }
            FilterCategory::Investigator => {
                let key = filter.expect_key()?;
                self.investigators().iter().any(|i| i == key)
            }
            FilterCategory::Condition => self.condition_key() == filter.expect_key()?,
            FilterCategory::Source
            | FilterCategory::SourceName
            | FilterCategory::SourceOrProxyName
            | FilterCategory::PertType
            | FilterCategory::Annotation => self.sources().matches(filter, catalog)?,
            FilterCategory::Target
            | FilterCategory::MeasureScale
            | FilterCategory::MeasureTech
            | FilterCategory::RegulatorySign => {
                filter.validate()?;
                true
            }
        };
        Ok(matched)
    }
}
