/// Experiment record invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("legacy max time {legacy_max} is earlier than time {time}")]
    InvalidTimeSpan { time: i32, legacy_max: i32 },

    #[error("legacy max time {legacy_max} set without a time")]
    LegacyMaxWithoutTime { legacy_max: i32 },

    #[error("experiment needs at least one perturbation source")]
    EmptySources,
}
