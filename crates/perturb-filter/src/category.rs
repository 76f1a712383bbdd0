//! The closed set of filter categories.

use std::fmt;
use std::str::FromStr;

use perturb_core::errors::FilterError;
use serde::{Deserialize, Serialize};

/// One dimension of a query predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    /// A perturbed source record, by id.
    Source,
    /// The perturbed gene's name key.
    SourceName,
    /// The perturbed gene's name key, or the proxy reported on instead.
    SourceOrProxyName,
    /// The perturbation technology key.
    PertType,
    /// The gene a value was measured for.
    Target,
    /// Experiment time span overlapping a closed range.
    Time,
    Investigator,
    Annotation,
    /// The scale a measurement technology reports on.
    MeasureScale,
    /// The measurement technology itself.
    MeasureTech,
    /// An experiment, by id.
    Experiment,
    Condition,
    /// The link sign a data point implies.
    RegulatorySign,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 13] = [
        Self::Source,
        Self::SourceName,
        Self::SourceOrProxyName,
        Self::PertType,
        Self::Target,
        Self::Time,
        Self::Investigator,
        Self::Annotation,
        Self::MeasureScale,
        Self::MeasureTech,
        Self::Experiment,
        Self::Condition,
        Self::RegulatorySign,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::SourceName => "source_name",
            Self::SourceOrProxyName => "source_or_proxy_name",
            Self::PertType => "pert_type",
            Self::Target => "target",
            Self::Time => "time",
            Self::Investigator => "investigator",
            Self::Annotation => "annotation",
            Self::MeasureScale => "measure_scale",
            Self::MeasureTech => "measure_tech",
            Self::Experiment => "experiment",
            Self::Condition => "condition",
            Self::RegulatorySign => "regulatory_sign",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterError::InvalidArgument {
                category: s.to_string(),
                reason: "unknown filter category".to_string(),
            })
    }
}
