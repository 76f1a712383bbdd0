/// Sign resolution and perturbation technology errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignError {
    #[error("invalid link relation: {value}")]
    InvalidRelation { value: String },

    #[error("invalid proxy sign: {value}")]
    InvalidProxySign { value: String },

    #[error("non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("perturbation technology not found: {id}")]
    UnknownTechnology { id: String },

    #[error("perturbation technology already defined: {id}")]
    DuplicateTechnology { id: String },

    #[error("perturbation technology {id} is referenced by data")]
    TechnologyInUse { id: String },
}
