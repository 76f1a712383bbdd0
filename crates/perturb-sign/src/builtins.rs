//! Perturbation technologies every dictionary starts with.

use perturb_core::constants::{TECH_ENGRAILED, TECH_MASO, TECH_MOE, TECH_VP16};
use perturb_core::models::{LinkRelation, PertTechnology};

pub fn maso() -> PertTechnology {
    PertTechnology::new(
        TECH_MASO,
        "Morpholino antisense oligonucleotide",
        LinkRelation::PertNegLinkPos,
    )
    .with_abbrev("MASO")
    .with_legacy_alt("MASO")
}

pub fn moe() -> PertTechnology {
    PertTechnology::new(TECH_MOE, "mRNA overexpression", LinkRelation::PertPosLinkPos)
        .with_abbrev("MOE")
        .with_legacy_alt("MOE")
}

/// Engrailed repressor domain fusion: targets can only go down.
pub fn engrailed() -> PertTechnology {
    PertTechnology::new(TECH_ENGRAILED, "Engrailed fusion", LinkRelation::AlwaysNegative)
        .with_abbrev("En")
        .with_legacy_alt("ENG")
}

/// VP16 activator domain fusion: targets can only go up.
pub fn vp16() -> PertTechnology {
    PertTechnology::new(TECH_VP16, "VP16 fusion", LinkRelation::AlwaysPositive)
        .with_abbrev("VP16")
        .with_legacy_alt("VP16")
}

pub fn all() -> Vec<PertTechnology> {
    vec![maso(), moe(), engrailed(), vp16()]
}
