mod error;
mod pulse;

pub use error::WaveformError;
pub use pulse::{Pulse, PulseMode};

use crate::preview::ShapeKind;

/// Trait for producing the pulse played in one period of the instrument.
///
/// The pulse is returned in physical units. Normalization for the instrument is done by the encoder.
pub trait Waveform: core::fmt::Debug {
    /// Calculate the pulse.
    fn calc(self) -> Result<Pulse, WaveformError>;

    /// How the pulse should be drawn in a preview.
    fn shape_kind(&self) -> ShapeKind {
        ShapeKind::Stepped
    }

    /// Whether a literal rest sample must precede the encoded data so that the instrument idles at rest.
    fn needs_rest_sample(&self) -> bool {
        false
    }
}
