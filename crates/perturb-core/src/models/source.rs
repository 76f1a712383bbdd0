use serde::{Deserialize, Serialize};

use super::relation::ProxySign;
use crate::errors::RecordError;

/// One perturbed source gene with the technology used to perturb it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PertSource {
    pub id: String,
    /// Canonical key of the perturbed gene's name.
    pub source_name_key: String,
    /// Key of the [`PertTechnology`](super::PertTechnology) used.
    pub pert_type_key: String,
    /// Gene actually reported on when the source is read through a proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_name_key: Option<String>,
    #[serde(default)]
    pub proxy_sign: ProxySign,
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl PertSource {
    pub fn new(
        id: impl Into<String>,
        source_name_key: impl Into<String>,
        pert_type_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_name_key: source_name_key.into(),
            pert_type_key: pert_type_key.into(),
            proxy_name_key: None,
            proxy_sign: ProxySign::None,
            annotations: Vec::new(),
        }
    }

    pub fn with_proxy(mut self, proxy_name_key: impl Into<String>, sign: ProxySign) -> Self {
        self.proxy_name_key = Some(proxy_name_key.into());
        self.proxy_sign = sign;
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// True when the source or its proxy carries the given name key.
    pub fn names(&self, name_key: &str) -> bool {
        self.source_name_key == name_key || self.proxy_name_key.as_deref() == Some(name_key)
    }
}

/// The non-empty list of sources perturbed together in one experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PertSource>", into = "Vec<PertSource>")]
pub struct PertSources(Vec<PertSource>);

impl PertSources {
    pub fn new(sources: Vec<PertSource>) -> Result<Self, RecordError> {
        if sources.is_empty() {
            return Err(RecordError::EmptySources);
        }
        Ok(Self(sources))
    }

    pub fn single(source: PertSource) -> Self {
        Self(vec![source])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PertSource> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The lone source, if exactly one was perturbed.
    pub fn only(&self) -> Option<&PertSource> {
        match self.0.as_slice() {
            [one] => Some(one),
            _ => None,
        }
    }

    /// Order-insensitive comparison.
    pub fn same_sources(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut mine: Vec<&PertSource> = self.0.iter().collect();
        let mut theirs: Vec<&PertSource> = other.0.iter().collect();
        mine.sort_by(|a, b| a.id.cmp(&b.id));
        theirs.sort_by(|a, b| a.id.cmp(&b.id));
        mine == theirs
    }
}

impl TryFrom<Vec<PertSource>> for PertSources {
    type Error = RecordError;

    fn try_from(sources: Vec<PertSource>) -> Result<Self, Self::Error> {
        Self::new(sources)
    }
}

impl From<PertSources> for Vec<PertSource> {
    fn from(sources: PertSources) -> Self {
        sources.0
    }
}

impl<'a> IntoIterator for &'a PertSources {
    type Item = &'a PertSource;
    type IntoIter = std::slice::Iter<'a, PertSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
