use perturb_core::errors::FilterError;
use perturb_core::models::{PertSource, PertSources};

use crate::category::FilterCategory;
use crate::filter::PertFilter;
use crate::target::{EvidenceCatalog, FilterTarget};

impl FilterTarget for PertSource {
    fn matches(
        &self,
        filter: &PertFilter,
        _catalog: &dyn EvidenceCatalog,
    ) -> Result<bool, FilterError> {
        let matched = match filter.category {
            FilterCategory::Source => self.id == filter.expect_key()?,
            FilterCategory::SourceName => self.source_name_key == filter.expect_key()?,
            FilterCategory::SourceOrProxyName => self.names(filter.expect_key()?),
            FilterCategory::PertType => self.pert_type_key == filter.expect_key()?,
            FilterCategory::Annotation => {
                let key = filter.expect_key()?;
                self.annotations.iter().any(|a| a == key)
            }
            FilterCategory::Target
            | FilterCategory::Time
            | FilterCategory::Investigator
            | FilterCategory::MeasureScale
            | FilterCategory::MeasureTech
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

/// A source list matches when any of its sources does.
impl FilterTarget for PertSources {
    fn matches(
        &self,
        filter: &PertFilter,
        catalog: &dyn EvidenceCatalog,
    ) -> Result<bool, FilterError> {
        for source in self {
            if source.matches(filter, catalog)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
