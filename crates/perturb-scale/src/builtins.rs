//! Scales every dictionary starts with.

use perturb_core::constants::{
    DDCT_AMPLIFICATION_FACTOR, SCALE_DDCT, SCALE_FOLD_POSITIVE, SCALE_FOLD_SIGNED,
};
use perturb_core::models::{ConversionRule, IllegalRange, MeasurementScale};

/// Signed fold change. Values in `[-1, 1)` cannot occur: a decrease to
/// half is written `-2`, no change is `1`.
pub fn fold_signed() -> MeasurementScale {
    MeasurementScale::new(SCALE_FOLD_SIGNED, "Fold change (signed)")
        .with_conversion(ConversionRule::NegativeReciprocal)
        .with_illegal_range(IllegalRange {
            min: Some(-1.0),
            min_inclusive: true,
            max: Some(1.0),
            max_inclusive: false,
        })
        .with_unchanged(1.0)
}

/// Plain fold change; anything at or below zero is illegal.
pub fn fold_positive() -> MeasurementScale {
    MeasurementScale::new(SCALE_FOLD_POSITIVE, "Fold change")
        .with_conversion(ConversionRule::NoOp)
        .with_illegal_range(IllegalRange::at_or_below(0.0))
        .with_unchanged(1.0)
}

/// Delta-delta-CT from QPCR.
pub fn ddct() -> MeasurementScale {
    MeasurementScale::new(SCALE_DDCT, "\u{0394}\u{0394}CT")
        .with_conversion(ConversionRule::Exponential {
            factor: DDCT_AMPLIFICATION_FACTOR,
        })
        .with_unchanged(0.0)
}

pub fn all() -> Vec<MeasurementScale> {
    vec![fold_signed(), fold_positive(), ddct()]
}

pub fn is_builtin(id: &str) -> bool {
    matches!(id, SCALE_FOLD_SIGNED | SCALE_FOLD_POSITIVE | SCALE_DDCT)
}
