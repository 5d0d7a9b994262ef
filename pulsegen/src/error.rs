use pulsegen_core::{encoding::EncodeError, link::LinkError, waveform::WaveformError};
use thiserror::Error;

/// A interface for error handling in pulsegen.
///
/// Every top-level operation reports exactly one of these and leaves the instrument
/// at its last successfully applied command.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum PulseGenError {
    /// Invalid pulse parameters.
    #[error("{0}")]
    Waveform(#[from] WaveformError),
    /// The pulse cannot be encoded for the instrument.
    #[error("{0}")]
    Encode(#[from] EncodeError),
    /// Error in the link.
    #[error("{0}")]
    Link(#[from] LinkError),
    /// A trigger was requested while the instrument is not armed.
    #[error("Trigger is not armed. Load a profile in burst mode first")]
    TriggerNotArmed,
}
