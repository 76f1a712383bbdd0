use super::{BatchError, FilterError, RecordError, ScaleError, SignError};

/// Top-level error for the perturbation evidence core.
#[derive(Debug, thiserror::Error)]
pub enum PerturbError {
    #[error("scale error: {0}")]
    ScaleError(#[from] ScaleError),

    #[error("sign error: {0}")]
    SignError(#[from] SignError),

    #[error("batch error: {0}")]
    BatchError(#[from] BatchError),

    #[error("filter error: {0}")]
    FilterError(#[from] FilterError),

    #[error("record error: {0}")]
    RecordError(#[from] RecordError),

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type PerturbResult<T> = Result<T, PerturbError>;
