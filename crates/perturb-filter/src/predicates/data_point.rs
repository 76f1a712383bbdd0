use perturb_core::errors::FilterError;
use perturb_core::models::{PertDataPoint, RegulatorySign};
use perturb_scale::{scale_to_fold, unchanged_fold};
use perturb_sign::resolve_with_proxy;

use crate::category::FilterCategory;
use crate::filter::PertFilter;
use crate::target::{missing, EvidenceCatalog, FilterTarget};

impl FilterTarget for PertDataPoint {
    fn matches(
        &self,
        filter: &PertFilter,
        catalog: &dyn EvidenceCatalog,
    ) -> Result<bool, FilterError> {
        let matched = match filter.category {
            FilterCategory::Target => self.target_key == filter.expect_key()?,
            FilterCategory::Annotation => {
                let key = filter.expect_key()?;
                self.annotations.iter().any(|a| a == key)
            }
            FilterCategory::Experiment => self.experiment_key == filter.expect_key()?,
            FilterCategory::MeasureTech => self.measure_key == filter.expect_key()?,
            FilterCategory::MeasureScale => catalog
                .measure_props(&self.measure_key)
                .ok_or_else(|| missing("measurement technology", &self.measure_key))?
                .matches(filter, catalog)?,
            FilterCategory::Source
            | FilterCategory::SourceName
            | FilterCategory::SourceOrProxyName
            | FilterCategory::PertType
            | FilterCategory::Time
            | FilterCategory::Investigator
            | FilterCategory::Condition => catalog
                .experiment(&self.experiment_key)
                .ok_or_else(|| missing("experiment", &self.experiment_key))?
                .matches(filter, catalog)?,
            FilterCategory::RegulatorySign => {
                implied_sign(self, catalog)? == filter.expect_sign()?
            }
        };
        Ok(matched)
    }
}

/// The link sign a data point implies for its (single) source.
///
/// The value is converted to fold change through its measurement scale and
/// compared with the scale's unchanged value, after proxy reversal of the
/// technology's relation. Multi-source experiments and scales without a
/// conversion rule or an unchanged value are `Unsigned`.
pub fn implied_sign(
    point: &PertDataPoint,
    catalog: &dyn EvidenceCatalog,
) -> Result<RegulatorySign, FilterError> {
    let experiment = catalog
        .experiment(&point.experiment_key)
        .ok_or_else(|| missing("experiment", &point.experiment_key))?;
    let Some(source) = experiment.sources().only() else {
        return Ok(RegulatorySign::Unsigned);
    };
    let technology = catalog
        .technology(&source.pert_type_key)
        .ok_or_else(|| missing("technology", &source.pert_type_key))?;
    let measure = catalog
        .measure_props(&point.measure_key)
        .ok_or_else(|| missing("measurement technology", &point.measure_key))?;
    let scale = catalog
        .scale(&measure.scale_key)
        .ok_or_else(|| missing("scale", &measure.scale_key))?;

    if scale.conversion.is_none() {
        return Ok(RegulatorySign::Unsigned);
    }
    let Some(unchanged) = unchanged_fold(scale)? else {
        return Ok(RegulatorySign::Unsigned);
    };
    let fold = scale_to_fold(scale, point.value)?;
    Ok(resolve_with_proxy(
        technology.relation,
        source.proxy_sign,
        fold,
        unchanged,
    )?)
}
