//! Property tests for perturb-filter: set laws over random expression trees.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use perturb_core::errors::FilterError;
use perturb_filter::{evaluate, EntitySource, FilterCategory, FilterExpr, PertFilter};

/// Entities tagged with annotation keys.
#[derive(Debug)]
struct Tagged(BTreeMap<String, BTreeSet<String>>);

impl EntitySource for Tagged {
    fn matches(&self, id: &str, filter: &PertFilter) -> Result<bool, FilterError> {
        let key = filter.expect_key()?;
        Ok(self.0.get(id).is_some_and(|tags| tags.contains(key)))
    }
}

fn leaf() -> impl Strategy<Value = FilterExpr> {
    prop_oneof![
        Just(FilterExpr::Never),
        Just(FilterExpr::Always),
        "[a-d]".prop_map(|tag| PertFilter::key(FilterCategory::Annotation, tag)
            .expect("key filters are valid")
            .into()),
    ]
}

fn expr() -> impl Strategy<Value = FilterExpr> {
    leaf().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.and(r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.or(r)),
            inner.prop_map(FilterExpr::not),
        ]
    })
}

fn entities() -> impl Strategy<Value = Tagged> {
    prop::collection::btree_map(
        "e[0-9]",
        prop::collection::btree_set("[a-d]", 0..4),
        0..8,
    )
    .prop_map(Tagged)
}

fn run(expr: &FilterExpr, domain: &BTreeSet<String>, source: &Tagged) -> BTreeSet<String> {
    evaluate(expr, domain, source).expect("tagged entities always answer")
}

proptest! {
    #[test]
    fn and_is_intersection(a in expr(), b in expr(), source in entities()) {
        let domain: BTreeSet<String> = source.0.keys().cloned().collect();
        let both = run(&a.clone().and(b.clone()), &domain, &source);
        let expected: BTreeSet<String> = run(&a, &domain, &source)
            .intersection(&run(&b, &domain, &source))
            .cloned()
            .collect();
        prop_assert_eq!(both, expected);
    }

    #[test]
    fn or_is_union(a in expr(), b in expr(), source in entities()) {
        let domain: BTreeSet<String> = source.0.keys().cloned().collect();
        let either = run(&a.clone().or(b.clone()), &domain, &source);
        let expected: BTreeSet<String> = run(&a, &domain, &source)
            .union(&run(&b, &domain, &source))
            .cloned()
            .collect();
        prop_assert_eq!(either, expected);
    }

    #[test]
    fn not_is_complement(a in expr(), source in entities()) {
        let domain: BTreeSet<String> = source.0.keys().cloned().collect();
        let negated = run(&a.clone().not(), &domain, &source);
        let expected: BTreeSet<String> = domain
            .difference(&run(&a, &domain, &source))
            .cloned()
            .collect();
        prop_assert_eq!(negated, expected);
    }

    #[test]
    fn constants_are_domain_and_empty(source in entities()) {
        let domain: BTreeSet<String> = source.0.keys().cloned().collect();
        prop_assert_eq!(run(&FilterExpr::Always, &domain, &source), domain.clone());
        prop_assert!(run(&FilterExpr::Never, &domain, &source).is_empty());
    }

    #[test]
    fn results_stay_within_domain(a in expr(), source in entities()) {
        let domain: BTreeSet<String> = source.0.keys().cloned().collect();
        prop_assert!(run(&a, &domain, &source).is_subset(&domain));
    }

    #[test]
    fn de_morgan_holds(a in expr(), b in expr(), source in entities()) {
        let domain: BTreeSet<String> = source.0.keys().cloned().collect();
        let lhs = run(&a.clone().and(b.clone()).not(), &domain, &source);
        let rhs = run(&a.not().or(b.not()), &domain, &source);
        prop_assert_eq!(lhs, rhs);
    }
}
