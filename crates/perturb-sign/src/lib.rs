//! # perturb-sign
//!
//! Turns a measured fold change plus the perturbation technology's link
//! relation into the regulatory sign of the implied link.
//!
//! - `resolve_sign`: promote / repress / unsigned from value vs. baseline
//! - `resolve_with_proxy`: same, after proxy-reporter sign reversal
//! - `check_consistency`: does an asserted link sign survive the data?
//! - `sign_implies_indirect_effect`: obligate technology moved the wrong way

pub mod builtins;
pub mod dictionary;
pub mod proxy;
pub mod resolver;

pub use dictionary::TechnologyDictionary;
pub use proxy::reverse_for_proxy;
pub use resolver::{
    check_consistency, resolve_sign, resolve_with_proxy, sign_implies_indirect_effect,
};
