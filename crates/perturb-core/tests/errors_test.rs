use perturb_core::errors::*;

#[test]
fn scale_error_invalid_factor_carries_factor() {
    let err = ScaleError::InvalidFactor { factor: 1.0 };
    assert!(err.to_string().contains('1'));
}

#[test]
fn scale_error_illegal_value_carries_scale_and_value() {
    let err = ScaleError::IllegalValue {
        scale: "fold_positive".into(),
        value: -3.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("fold_positive"));
    assert!(msg.contains("-3.5"));
}

#[test]
fn sign_error_invalid_relation_carries_value() {
    let err = SignError::InvalidRelation {
        value: "sideways".into(),
    };
    assert!(err.to_string().contains("sideways"));
}

#[test]
fn record_error_invalid_time_span_carries_both_times() {
    let err = RecordError::InvalidTimeSpan {
        time: 24,
        legacy_max: 12,
    };
    let msg = err.to_string();
    assert!(msg.contains("24"));
    assert!(msg.contains("12"));
}

#[test]
fn filter_error_depth_exceeded_carries_values() {
    let err = FilterError::DepthExceeded {
        max_depth: 8,
        depth: 9,
    };
    let msg = err.to_string();
    assert!(msg.contains('8'));
    assert!(msg.contains('9'));
}

// --- From impls ---

#[test]
fn scale_error_converts_to_perturb_error() {
    let err: PerturbError = ScaleError::NonFinite { value: f64::NAN }.into();
    assert!(matches!(err, PerturbError::ScaleError(_)));
}

#[test]
fn sign_error_converts_to_perturb_error() {
    let err: PerturbError = SignError::UnknownTechnology { id: "x".into() }.into();
    assert!(matches!(err, PerturbError::SignError(_)));
}

#[test]
fn batch_error_converts_to_perturb_error() {
    let err: PerturbError = BatchError::EmptyKeyFields.into();
    assert!(matches!(err, PerturbError::BatchError(_)));
}

#[test]
fn filter_error_converts_to_perturb_error() {
    let err: PerturbError = FilterError::InvalidArgument {
        category: "time".into(),
        reason: "expected a range".into(),
    }
    .into();
    assert!(matches!(err, PerturbError::FilterError(_)));
}

#[test]
fn scale_error_nests_inside_filter_error() {
    let err: FilterError = ScaleError::NotConvertible {
        scale: "custom".into(),
    }
    .into();
    assert!(matches!(err, FilterError::Scale(_)));
    assert!(err.to_string().contains("custom"));
}

#[test]
fn serialization_error_converts_to_perturb_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: PerturbError = json_err.into();
    assert!(matches!(err, PerturbError::SerializationError(_)));
}
