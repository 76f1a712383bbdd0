use serde::{Deserialize, Serialize};

use crate::errors::ScaleError;

/// How a scale's native values map onto canonical fold change.
///
/// The forward and inverse transforms live in `perturb-scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversionRule {
    /// Values already are fold changes.
    NoOp,
    /// `fold = factor ^ value`.
    Exponential { factor: f64 },
    /// Decreases are written as negative reciprocals: `-2` means half.
    NegativeReciprocal,
}

/// An interval of values that cannot legally occur on a scale.
///
/// A `None` bound leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IllegalRange {
    pub min: Option<f64>,
    pub min_inclusive: bool,
    pub max: Option<f64>,
    pub max_inclusive: bool,
}

impl IllegalRange {
    pub fn new(
        min: Option<f64>,
        min_inclusive: bool,
        max: Option<f64>,
        max_inclusive: bool,
    ) -> Result<Self, ScaleError> {
        for bound in [min, max].into_iter().flatten() {
            if bound.is_nan() {
                return Err(ScaleError::NonFinite { value: bound });
            }
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(ScaleError::InvalidRange { min: lo, max: hi });
            }
        }
        Ok(Self {
            min,
            min_inclusive,
            max,
            max_inclusive,
        })
    }

    /// Everything at or below `max`.
    pub fn at_or_below(max: f64) -> Self {
        Self {
            min: None,
            min_inclusive: false,
            max: Some(max),
            max_inclusive: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = match self.min {
            None => true,
            Some(lo) if self.min_inclusive => value >= lo,
            Some(lo) => value > lo,
        };
        let below_max = match self.max {
            None => true,
            Some(hi) if self.max_inclusive => value <= hi,
            Some(hi) => value < hi,
        };
        above_min && below_max
    }
}

/// A measurement scale definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementScale {
    pub id: String,
    pub name: String,
    /// Conversion to fold change. `None` means the scale cannot be converted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion: Option<ConversionRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illegal: Option<IllegalRange>,
    /// The value that represents "no change".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unchanged: Option<f64>,
}

impl MeasurementScale {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            conversion: None,
            illegal: None,
            unchanged: None,
        }
    }

    pub fn with_conversion(mut self, rule: ConversionRule) -> Self {
        self.conversion = Some(rule);
        self
    }

    pub fn with_illegal_range(mut self, range: IllegalRange) -> Self {
        self.illegal = Some(range);
        self
    }

    pub fn with_unchanged(mut self, unchanged: f64) -> Self {
        self.unchanged = Some(unchanged);
        self
    }

    /// Check the scale's own invariants: finite unchanged value that lies
    /// outside the illegal range.
    pub fn validate(&self) -> Result<(), ScaleError> {
        if let Some(unchanged) = self.unchanged {
            if !unchanged.is_finite() {
                return Err(ScaleError::NonFinite { value: unchanged });
            }
            if self.illegal.is_some_and(|r| r.contains(unchanged)) {
                return Err(ScaleError::UnchangedInIllegalRange {
                    scale: self.id.clone(),
                    unchanged,
                });
            }
        }
        Ok(())
    }

    /// True when `value` is finite and outside the illegal range.
    pub fn is_legal(&self, value: f64) -> bool {
        value.is_finite() && !self.illegal.is_some_and(|r| r.contains(value))
    }

    /// True when both scales interpret numbers identically. Display names
    /// may differ.
    pub fn same_numeric_meaning(&self, other: &Self) -> bool {
        self.conversion == other.conversion
            && self.illegal == other.illegal
            && self.unchanged == other.unchanged
    }
}
