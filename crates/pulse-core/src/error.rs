use thiserror::Error;

/// Errors raised while turning raw form fields into a [`crate::PulseObservation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("field `{0}` is required")]
    EmptyField(&'static str),
    #[error("unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },
    #[error("pulse rate {0} BPM is outside the accepted range 40..=120")]
    PulseRateOutOfRange(u32),
    #[error("pulse rate is not a whole number of beats per minute: {0:?}")]
    InvalidPulseRate(String),
}

/// Errors raised by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    InvalidObservation(#[from] ObservationError),
    /// Every accumulator netted to zero, so no share can be computed.
    #[error("dosha scores net to zero; confidence percentage is undefined")]
    DegenerateScores,
}
