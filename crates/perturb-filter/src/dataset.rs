//! An owned snapshot of the evidence set.

use std::collections::{BTreeMap, BTreeSet};

use perturb_core::config::FilterConfig;
use perturb_core::errors::{FilterError, ScaleError, SignError};
use perturb_core::models::{
    ExperimentRecord, MeasureProps, MeasurementScale, PertDataPoint, PertTechnology,
};
use perturb_core::traits::ChangeSink;
use perturb_scale::ScaleDictionary;
use perturb_sign::TechnologyDictionary;

use crate::evaluate::evaluate_with_config;
use crate::expr::FilterExpr;
use crate::filter::PertFilter;
use crate::target::{missing, EntitySource, EvidenceCatalog, FilterTarget};

/// Experiments, data points, measurement technologies and the dictionaries
/// that interpret them.
///
/// Filtering borrows the snapshot immutably, so an evaluation always sees
/// one consistent state.
#[derive(Debug, Clone, Default)]
pub struct PertDataSet {
    experiments: BTreeMap<String, ExperimentRecord>,
    data_points: BTreeMap<String, PertDataPoint>,
    measure_props: BTreeMap<String, MeasureProps>,
    scales: ScaleDictionary,
    technologies: TechnologyDictionary,
}

impl PertDataSet {
    /// An empty data set with the built-in scales and technologies.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionaries(scales: ScaleDictionary, technologies: TechnologyDictionary) -> Self {
        Self {
            scales,
            technologies,
            ..Self::default()
        }
    }

    pub fn insert_experiment(&mut self, experiment: ExperimentRecord) -> Option<ExperimentRecord> {
        self.experiments.insert(experiment.id.clone(), experiment)
    }

    pub fn insert_data_point(&mut self, point: PertDataPoint) -> Option<PertDataPoint> {
        self.data_points.insert(point.id.clone(), point)
    }

    pub fn insert_measure_props(&mut self, props: MeasureProps) -> Option<MeasureProps> {
        self.measure_props.insert(props.id.clone(), props)
    }

    pub fn data_point(&self, id: &str) -> Option<&PertDataPoint> {
        self.data_points.get(id)
    }

    pub fn scales(&self) -> &ScaleDictionary {
        &self.scales
    }

    pub fn technologies(&self) -> &TechnologyDictionary {
        &self.technologies
    }

    pub fn experiment_ids(&self) -> BTreeSet<String> {
        self.experiments.keys().cloned().collect()
    }

    pub fn data_point_ids(&self) -> BTreeSet<String> {
        self.data_points.keys().cloned().collect()
    }

    pub fn measure_props_ids(&self) -> BTreeSet<String> {
        self.measure_props.keys().cloned().collect()
    }

    /// True when any measurement technology reports on the scale.
    pub fn scale_in_use(&self, scale_id: &str) -> bool {
        uses_scale(&self.measure_props, scale_id)
    }

    /// True when any experiment source was perturbed with the technology.
    pub fn technology_in_use(&self, technology_id: &str) -> bool {
        uses_technology(&self.experiments, technology_id)
    }

    pub fn add_scale(
        &mut self,
        scale: MeasurementScale,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), ScaleError> {
        self.scales.add_scale(scale, sink)
    }

    /// Edit a scale, refusing numeric changes to scales this data set uses.
    pub fn edit_scale(
        &mut self,
        scale: MeasurementScale,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), ScaleError> {
        let measure_props = &self.measure_props;
        let in_use = |id: &str| uses_scale(measure_props, id);
        self.scales.edit_scale(scale, &in_use, sink)
    }

    pub fn remove_scale(
        &mut self,
        id: &str,
        sink: &mut dyn ChangeSink,
    ) -> Result<MeasurementScale, ScaleError> {
        let measure_props = &self.measure_props;
        let in_use = |id: &str| uses_scale(measure_props, id);
        self.scales.remove_scale(id, &in_use, sink)
    }

    pub fn add_technology(
        &mut self,
        technology: PertTechnology,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), SignError> {
        self.technologies.add_technology(technology, sink)
    }

    /// Edit a technology, refusing relation changes to technologies this
    /// data set uses.
    pub fn edit_technology(
        &mut self,
        technology: PertTechnology,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), SignError> {
        let experiments = &self.experiments;
        let in_use = |id: &str| uses_technology(experiments, id);
        self.technologies.edit_technology(technology, &in_use, sink)
    }

    pub fn remove_technology(
        &mut self,
        id: &str,
        sink: &mut dyn ChangeSink,
    ) -> Result<PertTechnology, SignError> {
        let experiments = &self.experiments;
        let in_use = |id: &str| uses_technology(experiments, id);
        self.technologies.remove_technology(id, &in_use, sink)
    }

    /// Experiments as a filterable domain.
    pub fn experiments(&self) -> EntityDomain<'_, ExperimentRecord> {
        EntityDomain::new("experiment", &self.experiments, self)
    }

    /// Data points as a filterable domain.
    pub fn data_points(&self) -> EntityDomain<'_, PertDataPoint> {
        EntityDomain::new("data point", &self.data_points, self)
    }

    /// Measurement technologies as a filterable domain.
    pub fn measurements(&self) -> EntityDomain<'_, MeasureProps> {
        EntityDomain::new("measurement technology", &self.measure_props, self)
    }

    /// Ids of every experiment matching `expr`.
    pub fn filter_experiments(
        &self,
        expr: &FilterExpr,
        config: &FilterConfig,
    ) -> Result<BTreeSet<String>, FilterError> {
        evaluate_with_config(expr, &self.experiment_ids(), &self.experiments(), config)
    }

    /// Ids of every data point matching `expr`.
    pub fn filter_data_points(
        &self,
        expr: &FilterExpr,
        config: &FilterConfig,
    ) -> Result<BTreeSet<String>, FilterError> {
        evaluate_with_config(expr, &self.data_point_ids(), &self.data_points(), config)
    }

    /// Ids of every measurement technology matching `expr`.
    pub fn filter_measurements(
        &self,
        expr: &FilterExpr,
        config: &FilterConfig,
    ) -> Result<BTreeSet<String>, FilterError> {
        evaluate_with_config(expr, &self.measure_props_ids(), &self.measurements(), config)
    }
}

fn uses_scale(measure_props: &BTreeMap<String, MeasureProps>, scale_id: &str) -> bool {
    measure_props.values().any(|m| m.scale_key == scale_id)
}

fn uses_technology(experiments: &BTreeMap<String, ExperimentRecord>, technology_id: &str) -> bool {
    experiments
        .values()
        .flat_map(|e| e.sources().iter())
        .any(|s| s.pert_type_key == technology_id)
}

impl EvidenceCatalog for PertDataSet {
    fn experiment(&self, id: &str) -> Option<&ExperimentRecord> {
        self.experiments.get(id)
    }

    fn measure_props(&self, id: &str) -> Option<&MeasureProps> {
        self.measure_props.get(id)
    }

    fn scale(&self, id: &str) -> Option<&MeasurementScale> {
        self.scales.get(id)
    }

    fn technology(&self, id: &str) -> Option<&PertTechnology> {
        self.technologies.get(id)
    }
}

/// One entity type of a catalog, addressable by id.
pub struct EntityDomain<'a, T> {
    kind: &'static str,
    entities: &'a BTreeMap<String, T>,
    catalog: &'a dyn EvidenceCatalog,
}

impl<'a, T: FilterTarget> EntityDomain<'a, T> {
    pub fn new(
        kind: &'static str,
        entities: &'a BTreeMap<String, T>,
        catalog: &'a dyn EvidenceCatalog,
    ) -> Self {
        Self {
            kind,
            entities,
            catalog,
        }
    }

    pub fn ids(&self) -> BTreeSet<String> {
        self.entities.keys().cloned().collect()
    }
}

impl<T: FilterTarget> EntitySource for EntityDomain<'_, T> {
    fn matches(&self, id: &str, filter: &PertFilter) -> Result<bool, FilterError> {
        self.entities
            .get(id)
            .ok_or_else(|| missing(self.kind, id))?
            .matches(filter, self.catalog)
    }
}
