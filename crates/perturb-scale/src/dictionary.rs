//! The dictionary of measurement scales known to a data set.

use std::collections::BTreeMap;

use perturb_core::errors::ScaleError;
use perturb_core::models::{Change, MeasurementScale};
use perturb_core::traits::ChangeSink;
use tracing::debug;

use crate::builtins;

/// Measurement scales keyed by id. Built-in scales are always present.
///
/// Scales referenced by data keep their numeric meaning: the caller says
/// which ids are in use, and edits that would reinterpret existing values
/// are refused.
#[derive(Debug, Clone)]
pub struct ScaleDictionary {
    scales: BTreeMap<String, MeasurementScale>,
}

impl ScaleDictionary {
    pub fn new() -> Self {
        let scales = builtins::all()
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();
        Self { scales }
    }

    pub fn get(&self, id: &str) -> Option<&MeasurementScale> {
        self.scales.get(id)
    }

    pub fn require(&self, id: &str) -> Result<&MeasurementScale, ScaleError> {
        self.get(id)
            .ok_or_else(|| ScaleError::UnknownScale { id: id.to_string() })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeasurementScale> {
        self.scales.values()
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn add_scale(
        &mut self,
        scale: MeasurementScale,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), ScaleError> {
        if self.scales.contains_key(&scale.id) {
            return Err(ScaleError::DuplicateScale { id: scale.id });
        }
        scale.validate()?;
        debug!(id = %scale.id, "scale added");
        sink.emit(Change::ScaleAdded {
            scale: scale.clone(),
        });
        self.scales.insert(scale.id.clone(), scale);
        Ok(())
    }

    /// Replace the definition of an existing scale.
    ///
    /// Renaming is always allowed. Changing the conversion, illegal range
    /// or unchanged value is refused for built-ins and for scales `in_use`
    /// reports as referenced.
    pub fn edit_scale(
        &mut self,
        scale: MeasurementScale,
        in_use: &dyn Fn(&str) -> bool,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), ScaleError> {
        let before = self.require(&scale.id)?.clone();
        scale.validate()?;
        if !before.same_numeric_meaning(&scale) {
            if builtins::is_builtin(&scale.id) {
                return Err(ScaleError::BuiltInScale { id: scale.id });
            }
            if in_use(&scale.id) {
                return Err(ScaleError::ScaleInUse { id: scale.id });
            }
        }
        debug!(id = %scale.id, "scale edited");
        sink.emit(Change::ScaleEdited {
            before,
            after: scale.clone(),
        });
        self.scales.insert(scale.id.clone(), scale);
        Ok(())
    }

    pub fn remove_scale(
        &mut self,
        id: &str,
        in_use: &dyn Fn(&str) -> bool,
        sink: &mut dyn ChangeSink,
    ) -> Result<MeasurementScale, ScaleError> {
        self.require(id)?;
        if builtins::is_builtin(id) {
            return Err(ScaleError::BuiltInScale { id: id.to_string() });
        }
        if in_use(id) {
            return Err(ScaleError::ScaleInUse { id: id.to_string() });
        }
        let removed = self
            .scales
            .remove(id)
            .ok_or_else(|| ScaleError::UnknownScale { id: id.to_string() })?;
        debug!(id, "scale removed");
        sink.emit(Change::ScaleRemoved {
            scale: removed.clone(),
        });
        Ok(removed)
    }
}

impl Default for ScaleDictionary {
    fn default() -> Self {
        Self::new()
    }
}
