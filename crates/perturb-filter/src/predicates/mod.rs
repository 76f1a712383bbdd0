//! [`FilterTarget`](crate::target::FilterTarget) implementations for the
//! evidence records.

mod data_point;
mod experiment;
mod measure;
mod source;

pub use data_point::implied_sign;
