//! # perturb-scale
//!
//! Converts measured values between a scale's native representation and
//! canonical fold change, and back.
//!
//! ## Rules
//! - **NoOp**: values already are fold changes
//! - **Exponential**: `fold = factor ^ value` (e.g. delta-delta-CT)
//! - **NegativeReciprocal**: decreases written as `-1 / fold`
//!
//! Every rule satisfies `from_fold(to_fold(x)) == x` for legal `x`.

pub mod builtins;
pub mod convert;
pub mod dictionary;

pub use convert::{
    convert_between, from_fold, round_trips, scale_from_fold, scale_to_fold, to_fold,
    unchanged_fold,
};
pub use dictionary::ScaleDictionary;
