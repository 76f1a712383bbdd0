//! # perturb-filter
//!
//! Composable boolean queries over perturbation evidence.
//!
//! An expression tree of `Never`, `Always`, `Identity(filter)`, `And`, `Or`
//! and `Not` is evaluated over a domain of entity ids. Atomic filters are
//! answered by the entity behind each id:
//! - **Experiments**: id, time, investigator, condition; source categories
//!   are delegated to the experiment's sources
//! - **Measurement technologies**: technology id and scale
//! - **Data points**: target, annotation and regulatory sign; experiment and
//!   measurement categories are delegated to the referenced records
//!
//! Entities answer `true` for categories outside their concern, so an `And`
//! across heterogeneous categories narrows instead of emptying the result.

pub mod category;
pub mod dataset;
pub mod evaluate;
pub mod expr;
pub mod filter;
pub mod predicates;
pub mod target;

pub use category::FilterCategory;
pub use dataset::{EntityDomain, PertDataSet};
pub use evaluate::{evaluate, evaluate_with_config};
pub use expr::FilterExpr;
pub use filter::{FilterValue, PertFilter};
pub use target::{EntitySource, EvidenceCatalog, FilterTarget};
