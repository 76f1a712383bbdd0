use perturb_core::constants::{SCALE_DDCT, SCALE_FOLD_POSITIVE, SCALE_FOLD_SIGNED};
use perturb_core::errors::ScaleError;
use perturb_core::models::{Change, ChangeRecord, ConversionRule, IllegalRange, MeasurementScale};
use perturb_core::traits::NullSink;
use perturb_scale::ScaleDictionary;

fn never_used(_: &str) -> bool {
    false
}

fn always_used(_: &str) -> bool {
    true
}

fn log2_scale() -> MeasurementScale {
    MeasurementScale::new("log2", "log2 ratio")
        .with_conversion(ConversionRule::Exponential { factor: 2.0 })
        .with_unchanged(0.0)
}

#[test]
fn new_dictionary_holds_builtins() {
    let dict = ScaleDictionary::new();
    let ids: Vec<&str> = dict.ids().collect();
    assert_eq!(ids, vec![SCALE_DDCT, SCALE_FOLD_POSITIVE, SCALE_FOLD_SIGNED]);
}

#[test]
fn add_scale_emits_change_and_rejects_duplicates() {
    let mut dict = ScaleDictionary::new();
    let mut log: Vec<ChangeRecord> = Vec::new();
    dict.add_scale(log2_scale(), &mut log).unwrap();
    assert!(dict.get("log2").is_some());
    assert!(matches!(log[0].change, Change::ScaleAdded { .. }));

    let err = dict.add_scale(log2_scale(), &mut log).unwrap_err();
    assert_eq!(err, ScaleError::DuplicateScale { id: "log2".into() });
    assert_eq!(log.len(), 1);
}

#[test]
fn add_scale_enforces_unchanged_outside_illegal_range() {
    let mut dict = ScaleDictionary::new();
    let bad = log2_scale().with_illegal_range(IllegalRange::at_or_below(0.0));
    assert!(matches!(
        dict.add_scale(bad, &mut NullSink),
        Err(ScaleError::UnchangedInIllegalRange { .. })
    ));
    assert!(dict.get("log2").is_none());
}

#[test]
fn in_use_scale_may_be_renamed_but_not_reinterpreted() {
    let mut dict = ScaleDictionary::new();
    dict.add_scale(log2_scale(), &mut NullSink).unwrap();

    let mut renamed = log2_scale();
    renamed.name = "Log2 fold".into();
    dict.edit_scale(renamed, &always_used, &mut NullSink).unwrap();
    assert_eq!(dict.get("log2").unwrap().name, "Log2 fold");

    let mut rebased = log2_scale();
    rebased.conversion = Some(ConversionRule::Exponential { factor: 10.0 });
    assert_eq!(
        dict.edit_scale(rebased.clone(), &always_used, &mut NullSink),
        Err(ScaleError::ScaleInUse { id: "log2".into() })
    );
    dict.edit_scale(rebased, &never_used, &mut NullSink).unwrap();
}

#[test]
fn edit_records_before_and_after() {
    let mut dict = ScaleDictionary::new();
    dict.add_scale(log2_scale(), &mut NullSink).unwrap();
    let mut log: Vec<ChangeRecord> = Vec::new();
    let mut renamed = log2_scale();
    renamed.name = "renamed".into();
    dict.edit_scale(renamed, &never_used, &mut log).unwrap();
    match &log[0].change {
        Change::ScaleEdited { before, after } => {
            assert_eq!(before.name, "log2 ratio");
            assert_eq!(after.name, "renamed");
        }
        other => panic!("unexpected change {other:?}"),
    }
}

#[test]
fn builtins_cannot_be_removed_or_redefined() {
    let mut dict = ScaleDictionary::new();
    assert_eq!(
        dict.remove_scale(SCALE_DDCT, &never_used, &mut NullSink),
        Err(ScaleError::BuiltInScale { id: SCALE_DDCT.into() })
    );
    let mut redefined = dict.get(SCALE_DDCT).unwrap().clone();
    redefined.unchanged = Some(1.0);
    assert!(matches!(
        dict.edit_scale(redefined, &never_used, &mut NullSink),
        Err(ScaleError::BuiltInScale { .. })
    ));
}

#[test]
fn remove_scale_checks_usage_then_emits() {
    let mut dict = ScaleDictionary::new();
    dict.add_scale(log2_scale(), &mut NullSink).unwrap();
    assert!(matches!(
        dict.remove_scale("log2", &always_used, &mut NullSink),
        Err(ScaleError::ScaleInUse { .. })
    ));

    let mut log: Vec<ChangeRecord> = Vec::new();
    let removed = dict.remove_scale("log2", &never_used, &mut log).unwrap();
    assert_eq!(removed.id, "log2");
    assert!(dict.get("log2").is_none());
    assert!(matches!(log[0].change, Change::ScaleRemoved { .. }));
}

#[test]
fn unknown_scale_is_reported() {
    let mut dict = ScaleDictionary::new();
    assert_eq!(
        dict.remove_scale("nope", &never_used, &mut NullSink),
        Err(ScaleError::UnknownScale { id: "nope".into() })
    );
    assert!(dict.require("nope").is_err());
    assert!(dict.get(SCALE_FOLD_SIGNED).is_some());
}
