//! Filter expression trees.
//!
//! Arity is carried by the variants themselves, so a `Not` without an
//! operand or an `And` with one cannot be built.

use serde::{Deserialize, Serialize};

use crate::filter::PertFilter;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterExpr {
    /// Matches nothing.
    Never,
    /// Matches the whole domain.
    Always,
    Identity(PertFilter),
    And(Box<FilterExpr>, Box<FilterExpr>),
    Or(Box<FilterExpr>, Box<FilterExpr>),
    Not(Box<FilterExpr>),
}

impl FilterExpr {
    pub fn identity(filter: PertFilter) -> Self {
        Self::Identity(filter)
    }

    pub fn and(self, other: FilterExpr) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: FilterExpr) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Left-folded conjunction. An empty list is `Always`.
    pub fn all_of<I: IntoIterator<Item = FilterExpr>>(exprs: I) -> Self {
        exprs
            .into_iter()
            .reduce(FilterExpr::and)
            .unwrap_or(Self::Always)
    }

    /// Left-folded disjunction. An empty list is `Never`.
    pub fn any_of<I: IntoIterator<Item = FilterExpr>>(exprs: I) -> Self {
        exprs
            .into_iter()
            .reduce(FilterExpr::or)
            .unwrap_or(Self::Never)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Never | Self::Always | Self::Identity(_) => 1,
            Self::Not(inner) => 1 + inner.depth(),
            Self::And(l, r) | Self::Or(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Every atomic filter in the tree, left to right.
    pub fn filters(&self) -> Vec<&PertFilter> {
        let mut out = Vec::new();
        self.collect_filters(&mut out);
        out
    }

    fn collect_filters<'a>(&'a self, out: &mut Vec<&'a PertFilter>) {
        match self {
            Self::Never | Self::Always => {}
            Self::Identity(filter) => out.push(filter),
            Self::Not(inner) => inner.collect_filters(out),
            Self::And(l, r) | Self::Or(l, r) => {
                l.collect_filters(out);
                r.collect_filters(out);
            }
        }
    }
}

impl From<PertFilter> for FilterExpr {
    fn from(filter: PertFilter) -> Self {
        Self::Identity(filter)
    }
}
