use super::{ScaleError, SignError};

/// Filter algebra errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid filter argument for category {category}: {reason}")]
    InvalidArgument { category: String, reason: String },

    #[error("filter expression too deep: max {max_depth}, reached {depth}")]
    DepthExceeded { max_depth: usize, depth: usize },

    #[error("{kind} not found: {id}")]
    MissingEntity { kind: String, id: String },

    #[error("scale error during filtering: {0}")]
    Scale(#[from] ScaleError),

    #[error("sign error during filtering: {0}")]
    Sign(#[from] SignError),
}
