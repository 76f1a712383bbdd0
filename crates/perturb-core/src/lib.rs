//! # perturb-core
//!
//! Foundation crate for the perturbation evidence core.
//! Defines the shared records, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PerturbConfig;
pub use errors::{PerturbError, PerturbResult};
pub use models::{
    Change, ChangeRecord, ConversionRule, ExperimentRecord, IllegalRange, LinkRelation,
    MeasureProps, MeasurementScale, PertDataPoint, PertSource, PertSources, PertTechnology,
    ProxySign, RegulatorySign, TimeSpan,
};
pub use traits::{ChangeSink, NullSink};
