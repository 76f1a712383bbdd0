//! Table-driven sign resolution.
//!
//! All values are fold changes; `unchanged` is the scale's "no change"
//! baseline expressed the same way.

use perturb_core::errors::SignError;
use perturb_core::models::{LinkRelation, ProxySign, RegulatorySign};

use crate::proxy::reverse_for_proxy;

/// The link sign implied by a measured value.
///
/// `PertPosLinkPos` promotes when the value is at or above baseline,
/// `PertNegLinkPos` is its mirror, and relations that carry no directional
/// information are always unsigned.
pub fn resolve_sign(
    relation: LinkRelation,
    value: f64,
    unchanged: f64,
) -> Result<RegulatorySign, SignError> {
    ensure_finite(value)?;
    ensure_finite(unchanged)?;
    let at_or_above = value >= unchanged;
    let sign = match relation {
        LinkRelation::PertPosLinkPos if at_or_above => RegulatorySign::Promote,
        LinkRelation::PertPosLinkPos => RegulatorySign::Repress,
        LinkRelation::PertNegLinkPos if at_or_above => RegulatorySign::Repress,
        LinkRelation::PertNegLinkPos => RegulatorySign::Promote,
        LinkRelation::AlwaysNegative
        | LinkRelation::AlwaysPositive
        | LinkRelation::NoRelation
        | LinkRelation::Other => RegulatorySign::Unsigned,
    };
    Ok(sign)
}

/// [`resolve_sign`] after applying proxy-reporter reversal to `relation`.
pub fn resolve_with_proxy(
    relation: LinkRelation,
    proxy: ProxySign,
    value: f64,
    unchanged: f64,
) -> Result<RegulatorySign, SignError> {
    resolve_sign(reverse_for_proxy(relation, proxy), value, unchanged)
}

/// Whether an asserted link sign is compatible with a measured value.
///
/// Returns `false` when the relation needs a baseline and none is known.
/// Obligate-sign relations ignore `asserted` and only check that the value
/// moved in the technology's guaranteed direction. A value exactly at
/// baseline contradicts nothing.
pub fn check_consistency(
    relation: LinkRelation,
    asserted: RegulatorySign,
    value: f64,
    unchanged: Option<f64>,
) -> Result<bool, SignError> {
    ensure_finite(value)?;
    let unchanged = match unchanged {
        Some(u) => ensure_finite(u)?,
        None => return Ok(!relation.needs_unchanged()),
    };
    let consistent = match relation {
        LinkRelation::PertPosLinkPos => match asserted {
            RegulatorySign::Promote => value >= unchanged,
            RegulatorySign::Repress => value <= unchanged,
            RegulatorySign::Unsigned => true,
        },
        LinkRelation::PertNegLinkPos => match asserted {
            RegulatorySign::Promote => value <= unchanged,
            RegulatorySign::Repress => value >= unchanged,
            RegulatorySign::Unsigned => true,
        },
        LinkRelation::AlwaysNegative => value <= unchanged,
        LinkRelation::AlwaysPositive => value >= unchanged,
        LinkRelation::NoRelation | LinkRelation::Other => true,
    };
    Ok(consistent)
}

/// True when an obligate-sign technology produced a value against its
/// guaranteed direction, so any apparent link must be indirect.
pub fn sign_implies_indirect_effect(
    relation: LinkRelation,
    value: f64,
    unchanged: f64,
) -> Result<bool, SignError> {
    ensure_finite(value)?;
    ensure_finite(unchanged)?;
    let indirect = match relation {
        LinkRelation::AlwaysNegative => value > unchanged,
        LinkRelation::AlwaysPositive => value < unchanged,
        LinkRelation::PertPosLinkPos
        | LinkRelation::PertNegLinkPos
        | LinkRelation::NoRelation
        | LinkRelation::Other => false,
    };
    Ok(indirect)
}

fn ensure_finite(value: f64) -> Result<f64, SignError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SignError::NonFinite { value })
    }
}
