//! Forward and inverse fold-change transforms.

use perturb_core::config::ScaleConfig;
use perturb_core::errors::ScaleError;
use perturb_core::models::{ConversionRule, MeasurementScale};

/// Convert a native scale value to fold change.
pub fn to_fold(value: f64, rule: &ConversionRule) -> Result<f64, ScaleError> {
    ensure_finite(value)?;
    let fold = match *rule {
        ConversionRule::NoOp => value,
        ConversionRule::Exponential { factor } => {
            check_factor(factor)?;
            factor.powf(value)
        }
        ConversionRule::NegativeReciprocal => {
            if value < 0.0 {
                1.0 / -value
            } else {
                value
            }
        }
    };
    ensure_finite(fold)
}

/// Convert a fold change back to the scale's native value.
pub fn from_fold(fold: f64, rule: &ConversionRule) -> Result<f64, ScaleError> {
    ensure_finite(fold)?;
    let value = match *rule {
        ConversionRule::NoOp => fold,
        ConversionRule::Exponential { factor } => {
            check_factor(factor)?;
            if fold <= 0.0 {
                return Err(ScaleError::UndefinedConversion {
                    value: fold,
                    reason: "logarithm of a non-positive fold change".into(),
                });
            }
            fold.ln() / factor.ln()
        }
        ConversionRule::NegativeReciprocal => {
            if fold == 0.0 {
                return Err(ScaleError::UndefinedConversion {
                    value: fold,
                    reason: "reciprocal of zero".into(),
                });
            }
            if fold < 1.0 {
                -1.0 / fold
            } else {
                fold
            }
        }
    };
    ensure_finite(value)
}

/// Convert a value measured on `scale` to fold change, rejecting values
/// that are illegal on that scale.
pub fn scale_to_fold(scale: &MeasurementScale, value: f64) -> Result<f64, ScaleError> {
    ensure_finite(value)?;
    if !scale.is_legal(value) {
        return Err(ScaleError::IllegalValue {
            scale: scale.id.clone(),
            value,
        });
    }
    to_fold(value, rule_of(scale)?)
}

/// Express a fold change on `scale`.
pub fn scale_from_fold(scale: &MeasurementScale, fold: f64) -> Result<f64, ScaleError> {
    let value = from_fold(fold, rule_of(scale)?)?;
    if !scale.is_legal(value) {
        return Err(ScaleError::IllegalValue {
            scale: scale.id.clone(),
            value,
        });
    }
    Ok(value)
}

/// Re-express a value from one scale on another, going through fold change.
pub fn convert_between(
    value: f64,
    from: &MeasurementScale,
    to: &MeasurementScale,
) -> Result<f64, ScaleError> {
    let fold = scale_to_fold(from, value)?;
    scale_from_fold(to, fold)
}

/// The scale's "no change" baseline in fold-change units.
pub fn unchanged_fold(scale: &MeasurementScale) -> Result<Option<f64>, ScaleError> {
    match scale.unchanged {
        Some(unchanged) => scale_to_fold(scale, unchanged).map(Some),
        None => Ok(None),
    }
}

/// True when `value` survives a fold-change round trip within the
/// configured tolerance.
pub fn round_trips(value: f64, rule: &ConversionRule, config: &ScaleConfig) -> bool {
    to_fold(value, rule)
        .and_then(|fold| from_fold(fold, rule))
        .map(|back| (back - value).abs() <= config.round_trip_tolerance)
        .unwrap_or(false)
}

fn rule_of(scale: &MeasurementScale) -> Result<&ConversionRule, ScaleError> {
    scale
        .conversion
        .as_ref()
        .ok_or_else(|| ScaleError::NotConvertible {
            scale: scale.id.clone(),
        })
}

fn check_factor(factor: f64) -> Result<(), ScaleError> {
    if !factor.is_finite() || factor <= 0.0 || factor == 1.0 {
        return Err(ScaleError::InvalidFactor { factor });
    }
    Ok(())
}

fn ensure_finite(value: f64) -> Result<f64, ScaleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScaleError::NonFinite { value })
    }
}
