//! Regulatory relation enumerations.
//!
//! # Examples
//!
//! ```
//! use perturb_core::models::LinkRelation;
//!
//! let relation: LinkRelation = "pert_neg_link_pos".parse().unwrap();
//! assert_eq!(relation, LinkRelation::PertNegLinkPos);
//! assert!(!relation.sign_undetermined());
//! assert!("sideways".parse::<LinkRelation>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SignError;

/// How the sign of a perturbation maps to the sign of a downstream link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkRelation {
    /// Raising the source raises the target when the link promotes.
    PertPosLinkPos,
    /// Lowering the source lowers the target when the link promotes.
    PertNegLinkPos,
    /// The technology can only push the target down.
    AlwaysNegative,
    /// The technology can only push the target up.
    AlwaysPositive,
    NoRelation,
    Other,
}

impl LinkRelation {
    pub const COUNT: usize = 6;

    /// All variants, in legacy ordinal order.
    pub const ALL: [LinkRelation; 6] = [
        Self::PertPosLinkPos,
        Self::PertNegLinkPos,
        Self::AlwaysNegative,
        Self::AlwaysPositive,
        Self::NoRelation,
        Self::Other,
    ];

    /// True when a measured value says nothing about the link's sign.
    pub fn sign_undetermined(self) -> bool {
        match self {
            Self::PertPosLinkPos | Self::PertNegLinkPos => false,
            Self::AlwaysNegative | Self::AlwaysPositive | Self::NoRelation | Self::Other => true,
        }
    }

    /// True for technologies with a fixed, guaranteed effect direction.
    pub fn is_obligate(self) -> bool {
        match self {
            Self::AlwaysNegative | Self::AlwaysPositive => true,
            Self::PertPosLinkPos | Self::PertNegLinkPos | Self::NoRelation | Self::Other => false,
        }
    }

    /// True when consistency checks need the scale's unchanged value.
    pub fn needs_unchanged(self) -> bool {
        match self {
            Self::PertPosLinkPos
            | Self::PertNegLinkPos
            | Self::AlwaysNegative
            | Self::AlwaysPositive => true,
            Self::NoRelation | Self::Other => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PertPosLinkPos => "pert_pos_link_pos",
            Self::PertNegLinkPos => "pert_neg_link_pos",
            Self::AlwaysNegative => "always_negative",
            Self::AlwaysPositive => "always_positive",
            Self::NoRelation => "no_relation",
            Self::Other => "other",
        }
    }

    /// Legacy ordinal used by older dictionaries.
    pub fn ordinal(self) -> i32 {
        match self {
            Self::PertPosLinkPos => 0,
            Self::PertNegLinkPos => 1,
            Self::AlwaysNegative => 2,
            Self::AlwaysPositive => 3,
            Self::NoRelation => 4,
            Self::Other => 5,
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkRelation {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SignError::InvalidRelation {
                value: s.to_string(),
            })
    }
}

impl TryFrom<i32> for LinkRelation {
    type Error = SignError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|r| r.ordinal() == ordinal)
            .ok_or_else(|| SignError::InvalidRelation {
                value: ordinal.to_string(),
            })
    }
}

/// Whether a proxy reporter reads out with the same or opposite sign as
/// the gene it stands in for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxySign {
    #[default]
    None,
    Same,
    Opposite,
}

impl ProxySign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Same => "same",
            Self::Opposite => "opposite",
        }
    }
}

impl FromStr for ProxySign {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "same" => Ok(Self::Same),
            "opposite" => Ok(Self::Opposite),
            _ => Err(SignError::InvalidProxySign {
                value: s.to_string(),
            }),
        }
    }
}

/// The regulatory sign implied for a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatorySign {
    Promote,
    Repress,
    Unsigned,
}

impl RegulatorySign {
    pub const ALL: [RegulatorySign; 3] = [Self::Promote, Self::Repress, Self::Unsigned];

    pub fn opposite(self) -> Self {
        match self {
            Self::Promote => Self::Repress,
            Self::Repress => Self::Promote,
            Self::Unsigned => Self::Unsigned,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Repress => "repress",
            Self::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for RegulatorySign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
