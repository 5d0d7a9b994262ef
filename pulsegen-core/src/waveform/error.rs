use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
/// An error produced by invalid pulse parameters.
pub enum WaveformError {
    /// The period has no logical samples.
    #[error("Period points ({0}) must be at least 1")]
    PeriodPointsInvalid(usize),
    /// The oversampling factor is zero.
    #[error("Oversampling factor ({0}) must be at least 1")]
    OversampleInvalid(usize),
    /// The pulse is too short to be played.
    #[error("Pulse length ({0}) must be at least 2")]
    TooShort(usize),
    /// A segment time is negative or not finite.
    #[error("Segment time ({0} ms) must be non-negative and finite")]
    TimeInvalid(f64),
    /// Both segments have zero length.
    #[error("Spike time and reference time must not both be zero")]
    EmptyPeriod,
    /// An amplitude is not finite.
    #[error("Amplitude ({0}) must be finite")]
    AmplitudeInvalid(f64),
    /// The time base of the pulse is not positive.
    #[error("Sample rate ({0} samples/ms) must be positive and finite")]
    SampleRateInvalid(f64),
    /// A sample is not finite.
    #[error("Sample [{0}] ({1}) must be finite")]
    SampleInvalid(usize, f64),
    /// The delay is not finite.
    #[error("Delay ({0} ms) must be finite")]
    DelayInvalid(f64),
    /// A differential pulse with zero shift is the zero vector.
    #[error("Shift of 0 samples does not produce a differential pulse")]
    ZeroShift,
    /// The shift moves the whole pulse out of the window.
    #[error("Shift ({0} samples) must be shorter than the pulse ({1} samples)")]
    ShiftOutOfRange(isize, usize),
    /// The sampling interval of a model function is empty or not finite.
    #[error("Sampling interval [{0}, {1}] is invalid")]
    IntervalInvalid(f64, f64),
}
