use pulsegen_core::{preview::Preview, waveform::Waveform};

use crate::error::PulseGenError;

/// Computes the pulse that [`Controller::load_profile`] would upload and draws it with `renderer`.
///
/// [`Controller::load_profile`]: crate::Controller::load_profile
pub fn preview<W: Waveform, P: Preview + ?Sized>(
    waveform: W,
    renderer: &mut P,
) -> Result<(), PulseGenError> {
    let shape = waveform.shape_kind();
    let pulse = waveform.calc()?;
    tracing::debug!(
        "Preview {} samples over {} ms as {:?}",
        pulse.len(),
        pulse.period_ms(),
        shape
    );
    renderer.render(pulse.samples(), pulse.period_ms(), shape);
    Ok(())
}
