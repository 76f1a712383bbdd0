use serde::{Deserialize, Serialize};

use super::relation::LinkRelation;

/// A perturbation technology (morpholino, overexpression, fusion construct, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PertTechnology {
    pub id: String,
    /// Display type name, e.g. "Morpholino antisense oligonucleotide".
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbrev: Option<String>,
    /// Tag used for this technology by legacy import formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_alt: Option<String>,
    pub relation: LinkRelation,
}

impl PertTechnology {
    pub fn new(id: impl Into<String>, type_name: impl Into<String>, relation: LinkRelation) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            abbrev: None,
            legacy_alt: None,
            relation,
        }
    }

    pub fn with_abbrev(mut self, abbrev: impl Into<String>) -> Self {
        self.abbrev = Some(abbrev.into());
        self
    }

    pub fn with_legacy_alt(mut self, tag: impl Into<String>) -> Self {
        self.legacy_alt = Some(tag.into());
        self
    }

    /// Abbreviation when present, otherwise the full type name.
    pub fn display_name(&self) -> &str {
        self.abbrev.as_deref().unwrap_or(&self.type_name)
    }
}
