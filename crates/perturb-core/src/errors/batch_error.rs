/// Batch key configuration errors.
///
/// Key building and collision tracking never reject rows; these only
/// cover malformed key configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BatchError {
    #[error("unknown batch key field: {name}")]
    UnknownKeyField { name: String },

    #[error("batch key needs at least one field")]
    EmptyKeyFields,
}
