//! The dictionary of perturbation technologies.

use std::collections::BTreeMap;

use perturb_core::errors::SignError;
use perturb_core::models::{Change, PertTechnology};
use perturb_core::traits::ChangeSink;
use tracing::debug;

use crate::builtins;

/// Perturbation technologies keyed by id.
#[derive(Debug, Clone)]
pub struct TechnologyDictionary {
    technologies: BTreeMap<String, PertTechnology>,
}

impl TechnologyDictionary {
    /// A dictionary seeded with the built-in technologies.
    pub fn new() -> Self {
        let technologies = builtins::all()
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();
        Self { technologies }
    }

    pub fn empty() -> Self {
        Self {
            technologies: BTreeMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&PertTechnology> {
        self.technologies.get(id)
    }

    pub fn require(&self, id: &str) -> Result<&PertTechnology, SignError> {
        self.get(id)
            .ok_or_else(|| SignError::UnknownTechnology { id: id.to_string() })
    }

    /// Look a technology up by a tag found in import files: its id,
    /// abbreviation or legacy alternate tag, ignoring case.
    pub fn find_by_tag(&self, tag: &str) -> Option<&PertTechnology> {
        let tag = tag.trim();
        self.technologies.values().find(|t| {
            t.id.eq_ignore_ascii_case(tag)
                || t.abbrev.as_deref().is_some_and(|a| a.eq_ignore_ascii_case(tag))
                || t.legacy_alt.as_deref().is_some_and(|l| l.eq_ignore_ascii_case(tag))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PertTechnology> {
        self.technologies.values()
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }

    pub fn add_technology(
        &mut self,
        technology: PertTechnology,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), SignError> {
        if self.technologies.contains_key(&technology.id) {
            return Err(SignError::DuplicateTechnology { id: technology.id });
        }
        debug!(id = %technology.id, relation = %technology.relation, "technology added");
        sink.emit(Change::TechnologyAdded {
            technology: technology.clone(),
        });
        self.technologies.insert(technology.id.clone(), technology);
        Ok(())
    }

    /// Replace a technology definition. Changing the link relation of a
    /// technology referenced by data is refused.
    pub fn edit_technology(
        &mut self,
        technology: PertTechnology,
        in_use: &dyn Fn(&str) -> bool,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), SignError> {
        let before = self.require(&technology.id)?.clone();
        if before.relation != technology.relation && in_use(&technology.id) {
            return Err(SignError::TechnologyInUse { id: technology.id });
        }
        debug!(id = %technology.id, "technology edited");
        sink.emit(Change::TechnologyEdited {
            before,
            after: technology.clone(),
        });
        self.technologies.insert(technology.id.clone(), technology);
        Ok(())
    }

    pub fn remove_technology(
        &mut self,
        id: &str,
        in_use: &dyn Fn(&str) -> bool,
        sink: &mut dyn ChangeSink,
    ) -> Result<PertTechnology, SignError> {
        self.require(id)?;
        if in_use(id) {
            return Err(SignError::TechnologyInUse { id: id.to_string() });
        }
        let removed = self
            .technologies
            .remove(id)
            .ok_or_else(|| SignError::UnknownTechnology { id: id.to_string() })?;
        debug!(id, "technology removed");
        sink.emit(Change::TechnologyRemoved {
            technology: removed.clone(),
        });
        Ok(removed)
    }
}

impl Default for TechnologyDictionary {
    fn default() -> Self {
        Self::new()
    }
}
