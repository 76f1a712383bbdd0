mod batch_error;
mod filter_error;
mod perturb_error;
mod record_error;
mod scale_error;
mod sign_error;

pub use batch_error::BatchError;
pub use filter_error::FilterError;
pub use perturb_error::{PerturbError, PerturbResult};
pub use record_error::RecordError;
pub use scale_error::ScaleError;
pub use sign_error::SignError;
