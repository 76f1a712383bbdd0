//! Property tests for perturb-sign: totality and proxy involution.

use proptest::prelude::*;

use perturb_core::models::{LinkRelation, ProxySign, RegulatorySign};
use perturb_sign::{check_consistency, resolve_sign, resolve_with_proxy, reverse_for_proxy};

fn relation_strategy() -> impl Strategy<Value = LinkRelation> {
    prop::sample::select(LinkRelation::ALL.to_vec())
}

fn proxy_strategy() -> impl Strategy<Value = ProxySign> {
    prop::sample::select(vec![ProxySign::None, ProxySign::Same, ProxySign::Opposite])
}

fn fold_strategy() -> impl Strategy<Value = f64> {
    1.0e-6_f64..1.0e6
}

proptest! {
    #[test]
    fn resolve_sign_is_total(
        relation in relation_strategy(),
        value in fold_strategy(),
        unchanged in fold_strategy(),
    ) {
        let sign = resolve_sign(relation, value, unchanged);
        prop_assert!(sign.is_ok());
        let sign = sign.unwrap();
        prop_assert!(RegulatorySign::ALL.contains(&sign));
        prop_assert_eq!(sign == RegulatorySign::Unsigned, relation.sign_undetermined());
    }

    #[test]
    fn opposite_proxy_equals_swapped_relation(
        relation in relation_strategy(),
        value in fold_strategy(),
        unchanged in fold_strategy(),
    ) {
        let swapped = match relation {
            LinkRelation::PertPosLinkPos => LinkRelation::PertNegLinkPos,
            LinkRelation::PertNegLinkPos => LinkRelation::PertPosLinkPos,
            other => other,
        };
        prop_assert_eq!(
            resolve_with_proxy(relation, ProxySign::Opposite, value, unchanged).unwrap(),
            resolve_sign(swapped, value, unchanged).unwrap()
        );
    }

    #[test]
    fn proxy_reversal_is_an_involution(relation in relation_strategy(), proxy in proxy_strategy()) {
        prop_assert_eq!(reverse_for_proxy(reverse_for_proxy(relation, proxy), proxy), relation);
    }

    #[test]
    fn resolved_sign_is_always_consistent(
        relation in relation_strategy(),
        value in fold_strategy(),
        unchanged in fold_strategy(),
    ) {
        prop_assume!(!relation.is_obligate());
        let sign = resolve_sign(relation, value, unchanged).unwrap();
        prop_assert!(check_consistency(relation, sign, value, Some(unchanged)).unwrap());
    }
}
