/// Measurement scale and conversion errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("invalid conversion factor {factor}: must be finite, > 0 and != 1")]
    InvalidFactor { factor: f64 },

    #[error("conversion undefined for value {value}: {reason}")]
    UndefinedConversion { value: f64, reason: String },

    #[error("non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("value {value} is illegal on scale {scale}")]
    IllegalValue { scale: String, value: f64 },

    #[error("scale {scale} has no conversion to fold change")]
    NotConvertible { scale: String },

    #[error("unchanged value {unchanged} of scale {scale} falls inside its illegal range")]
    UnchangedInIllegalRange { scale: String, unchanged: f64 },

    #[error("invalid illegal range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("scale not found: {id}")]
    UnknownScale { id: String },

    #[error("scale already defined: {id}")]
    DuplicateScale { id: String },

    #[error("scale {id} is referenced by data")]
    ScaleInUse { id: String },

    #[error("built-in scale {id} cannot be removed or redefined")]
    BuiltInScale { id: String },
}
