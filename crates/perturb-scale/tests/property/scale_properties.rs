//! Property tests for perturb-scale: fold-change round trips.

use proptest::prelude::*;

use perturb_core::models::ConversionRule;
use perturb_scale::builtins;
use perturb_scale::convert::{from_fold, scale_from_fold, scale_to_fold, to_fold};

const TOLERANCE: f64 = 1e-9;

fn factor_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.05_f64..0.95, 1.05_f64..10.0]
}

// Legal values of the signed-fold scale: below -1 or at least 1.
fn signed_fold_value() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6_f64..-1.000_001, 1.0_f64..1.0e6]
}

proptest! {
    #[test]
    fn exponential_round_trip(factor in factor_strategy(), value in -20.0_f64..20.0) {
        let rule = ConversionRule::Exponential { factor };
        let back = from_fold(to_fold(value, &rule).unwrap(), &rule).unwrap();
        prop_assert!((back - value).abs() <= TOLERANCE, "{} -> {}", value, back);
    }

    #[test]
    fn negative_reciprocal_round_trip(value in signed_fold_value()) {
        let rule = ConversionRule::NegativeReciprocal;
        let back = from_fold(to_fold(value, &rule).unwrap(), &rule).unwrap();
        prop_assert!((back - value).abs() <= TOLERANCE * value.abs(), "{} -> {}", value, back);
    }

    #[test]
    fn no_op_round_trip(value in -1.0e9_f64..1.0e9) {
        let rule = ConversionRule::NoOp;
        prop_assert_eq!(from_fold(to_fold(value, &rule).unwrap(), &rule).unwrap(), value);
    }

    #[test]
    fn legal_signed_fold_values_round_trip_through_scale(value in signed_fold_value()) {
        let scale = builtins::fold_signed();
        let fold = scale_to_fold(&scale, value).unwrap();
        prop_assert!(fold > 0.0);
        let back = scale_from_fold(&scale, fold).unwrap();
        prop_assert!((back - value).abs() <= TOLERANCE * value.abs());
    }

    #[test]
    fn fold_is_monotone_on_ddct(a in -15.0_f64..15.0, b in -15.0_f64..15.0) {
        prop_assume!((a - b).abs() > 1e-6);
        let scale = builtins::ddct();
        let fa = scale_to_fold(&scale, a).unwrap();
        let fb = scale_to_fold(&scale, b).unwrap();
        prop_assert_eq!(a < b, fa < fb);
    }
}
