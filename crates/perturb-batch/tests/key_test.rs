use perturb_batch::{build_batch_key, build_row_key, ImportRow, SourceToken};
use perturb_core::errors::BatchError;
use perturb_core::models::BatchKeyField;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn row() -> ImportRow {
    ImportRow {
        date: "2006-01-05".into(),
        time: "24".into(),
        condition: "ctrl".into(),
        investigators: names(&["Bob", "Alice"]),
        sources: vec![SourceToken::new("gata", "MASO")],
        batch_id: "2".into(),
        target: "otx".into(),
        value: "2.5".into(),
    }
}

#[test]
fn row_key_ignores_investigator_order() {
    let sources = vec![SourceToken::new("gata", "MASO")];
    let a = build_row_key(&sources, "2006-01-05", &names(&["Bob", "Alice"]), "24", "ctrl", "2");
    let b = build_row_key(&sources, "2006-01-05", &names(&["Alice", "Bob"]), "24", "ctrl", "2");
    assert_eq!(a, b);
}

#[test]
fn row_key_ignores_source_order() {
    let forward = vec![SourceToken::new("gata", "MASO"), SourceToken::new("otx", "MOE")];
    let backward = vec![SourceToken::new("otx", "MOE"), SourceToken::new("gata", "MASO")];
    let invs = names(&["Ann"]);
    assert_eq!(
        build_row_key(&forward, "d", &invs, "t", "c", "b"),
        build_row_key(&backward, "d", &invs, "t", "c", "b")
    );
}

#[test]
fn row_key_layout_is_stable() {
    let key = build_row_key(
        &[SourceToken::new("gata", "MASO")],
        " 2006-01-05 ",
        &names(&["Bob", "Alice"]),
        "24",
        "ctrl",
        "2",
    );
    assert_eq!(key, "2006-01-05*$*2*$*24*$*ctrl*$*Alice*&*Bob*$*gata*/*MASO");
}

#[test]
fn row_key_distinguishes_experiment_type() {
    let invs = names(&["Ann"]);
    let maso = build_row_key(&[SourceToken::new("gata", "MASO")], "d", &invs, "t", "c", "b");
    let moe = build_row_key(&[SourceToken::new("gata", "MOE")], "d", &invs, "t", "c", "b");
    assert_ne!(maso, moe);
}

#[test]
fn slashes_in_source_names_do_not_alias() {
    let invs = names(&["Ann"]);
    let a = build_row_key(&[SourceToken::new("a/b", "c")], "d", &invs, "t", "c", "b");
    let b = build_row_key(&[SourceToken::new("a", "b/c")], "d", &invs, "t", "c", "b");
    assert_ne!(a, b);
}

#[test]
fn batch_key_uses_chosen_fields_in_order() {
    let key = build_batch_key(&[BatchKeyField::BatchId, BatchKeyField::Date], &row()).unwrap();
    assert_eq!(key, "2::2006-01-05");

    let key = build_batch_key(&[BatchKeyField::Investigators], &row()).unwrap();
    assert_eq!(key, "Alice*&*Bob");
}

#[test]
fn batch_key_with_all_fields() {
    let key = build_batch_key(&BatchKeyField::ALL, &row()).unwrap();
    assert_eq!(key, "2006-01-05::Alice*&*Bob::2::24::ctrl");
}

#[test]
fn batch_key_needs_fields() {
    assert_eq!(build_batch_key(&[], &row()), Err(BatchError::EmptyKeyFields));
}
