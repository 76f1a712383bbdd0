use perturb_core::errors::FilterError;
use perturb_core::models::MeasureProps;

use crate::category::FilterCategory;
use crate::filter::PertFilter;
use crate::target::{EvidenceCatalog, FilterTarget};

impl FilterTarget for MeasureProps {
    fn matches(
        &self,
        filter: &PertFilter,
        _catalog: &dyn EvidenceCatalog,
    ) -> Result<bool, FilterError> {
        let matched = match filter.category {
            FilterCategory::MeasureTech => self.id == filter.expect_key()?,
            FilterCategory::MeasureScale => self.scale_key == filter.expect_key()?,
            FilterCategory::Source
            | FilterCategory::SourceName
            | FilterCategory::SourceOrProxyName
            | FilterCategory::PertType
            | FilterCategory::Target
            | FilterCategory::Time
            | FilterCategory::Investigator
            | FilterCategory::Annotation
            | FilterCategory::Experiment
            | FilterCategory::Condition
            | FilterCategory::RegulatorySign => {
                filter.validate()?;
                true
            }
        };
        Ok(matched)
    }
}
