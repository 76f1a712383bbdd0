pub mod batch_field;
pub mod change;
pub mod data_point;
pub mod experiment;
pub mod measurement;
pub mod relation;
pub mod scale;
pub mod source;
pub mod technology;

pub use batch_field::BatchKeyField;
pub use change::{Change, ChangeRecord};
pub use data_point::PertDataPoint;
pub use experiment::{ExperimentRecord, TimeSpan};
pub use measurement::MeasureProps;
pub use relation::{LinkRelation, ProxySign, RegulatorySign};
pub use scale::{ConversionRule, IllegalRange, MeasurementScale};
pub use source::{PertSource, PertSources};
pub use technology::PertTechnology;
