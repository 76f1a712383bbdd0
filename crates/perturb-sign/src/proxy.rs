//! Proxy-reporter sign reversal.

use perturb_core::models::{LinkRelation, ProxySign};

/// The relation to use when the target is read through a proxy.
///
/// An opposite-sign proxy swaps the two perturbation-driven relations;
/// every other relation and every other proxy sign leaves it untouched.
pub fn reverse_for_proxy(relation: LinkRelation, proxy: ProxySign) -> LinkRelation {
    match proxy {
        ProxySign::None | ProxySign::Same => relation,
        ProxySign::Opposite => match relation {
            LinkRelation::PertPosLinkPos => LinkRelation::PertNegLinkPos,
            LinkRelation::PertNegLinkPos => LinkRelation::PertPosLinkPos,
            LinkRelation::AlwaysNegative
            | LinkRelation::AlwaysPositive
            | LinkRelation::NoRelation
            | LinkRelation::Other => relation,
        },
    }
}
