use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
/// An error produced while normalizing a pulse for the instrument.
pub enum EncodeError {
    /// The pulse is constant, so no scale can be derived.
    #[error("Pulse is constant ({0}), amplitude must not be zero")]
    ZeroAmplitude(f64),
    /// The pinned start level is outside the range of the pulse.
    #[error("Start level ({0}) is out of range ([{1}, {2}])")]
    PinOutOfRange(f64, f64, f64),
}
