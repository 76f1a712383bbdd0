//! A single `(category, value)` predicate.

use perturb_core::errors::FilterError;
use perturb_core::models::RegulatorySign;
use serde::{Deserialize, Serialize};

use crate::category::FilterCategory;

/// The comparison value carried by a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// A canonical key (gene name key, technology key, record id, ...).
    Key(String),
    /// A closed time range `[min, max]`.
    TimeRange { min: i32, max: i32 },
    Sign(RegulatorySign),
}

/// One atomic predicate.
///
/// The value shape must fit the category: `Time` takes a
/// [`FilterValue::TimeRange`], `RegulatorySign` a [`FilterValue::Sign`] and
/// every other category a [`FilterValue::Key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PertFilter {
    pub category: FilterCategory,
    pub value: FilterValue,
}

impl PertFilter {
    pub fn new(category: FilterCategory, value: FilterValue) -> Result<Self, FilterError> {
        let filter = Self { category, value };
        filter.validate()?;
        Ok(filter)
    }

    pub fn key(category: FilterCategory, key: impl Into<String>) -> Result<Self, FilterError> {
        Self::new(category, FilterValue::Key(key.into()))
    }

    pub fn time_range(min: i32, max: i32) -> Result<Self, FilterError> {
        Self::new(FilterCategory::Time, FilterValue::TimeRange { min, max })
    }

    pub fn sign(sign: RegulatorySign) -> Self {
        Self {
            category: FilterCategory::RegulatorySign,
            value: FilterValue::Sign(sign),
        }
    }

    /// Check that the value shape fits the category.
    pub fn validate(&self) -> Result<(), FilterError> {
        match self.category {
            FilterCategory::Time => self.expect_time_range().map(|_| ()),
            FilterCategory::RegulatorySign => self.expect_sign().map(|_| ()),
            FilterCategory::Source
            | FilterCategory::SourceName
            | FilterCategory::SourceOrProxyName
            | FilterCategory::PertType
            | FilterCategory::Target
            | FilterCategory::Investigator
            | FilterCategory::Annotation
            | FilterCategory::MeasureScale
            | FilterCategory::MeasureTech
            | FilterCategory::Experiment
            | FilterCategory::Condition => self.expect_key().map(|_| ()),
        }
    }

    pub fn expect_key(&self) -> Result<&str, FilterError> {
        match &self.value {
            FilterValue::Key(key) => Ok(key),
            other => Err(self.mismatch("a key", other)),
        }
    }

    pub fn expect_time_range(&self) -> Result<(i32, i32), FilterError> {
        match self.value {
            FilterValue::TimeRange { min, max } if min <= max => Ok((min, max)),
            FilterValue::TimeRange { min, max } => Err(FilterError::InvalidArgument {
                category: self.category.to_string(),
                reason: format!("time range {min}-{max} has min above max"),
            }),
            ref other => Err(self.mismatch("a time range", other)),
        }
    }

    pub fn expect_sign(&self) -> Result<RegulatorySign, FilterError> {
        match self.value {
            FilterValue::Sign(sign) => Ok(sign),
            ref other => Err(self.mismatch("a regulatory sign", other)),
        }
    }

    fn mismatch(&self, wanted: &str, got: &FilterValue) -> FilterError {
        FilterError::InvalidArgument {
            category: self.category.to_string(),
            reason: format!("expected {wanted}, got {got:?}"),
        }
    }
}
