use pulsegen_core::{
    preview::ShapeKind,
    waveform::{Pulse, PulseMode, Waveform, WaveformError},
};

/// Subtracts a copy of `pulse` shifted by `delta` samples from `pulse`.
///
/// The result is zero-extended to `pulse.len() + |delta|` samples and tagged [`PulseMode::Paired`].
/// A positive `delta` delays the copy, a negative one advances it.
///
/// # Errors
///
/// Returns [`WaveformError::ZeroShift`] if `delta` is zero and [`WaveformError::ShiftOutOfRange`] if the shift
/// moves the copy completely out of the pulse.
///
/// # Examples
///
/// ```
/// # use pulsegen::waveform::apply_delay;
/// # use pulsegen::core::waveform::Pulse;
/// let pulse = Pulse::new(vec![1., 2., 3.], 1.).unwrap();
/// assert_eq!(&[1., 1., 1., -3.], apply_delay(&pulse, 1).unwrap().samples());
/// ```
pub fn apply_delay(pulse: &Pulse, delta: isize) -> Result<Pulse, WaveformError> {
    let len = pulse.len();
    let shift = delta.unsigned_abs();
    if shift == 0 {
        return Err(WaveformError::ZeroShift);
    }
    if shift >= len {
        return Err(WaveformError::ShiftOutOfRange(delta, len));
    }

    let mut a = vec![0.; len + shift];
    let mut b = vec![0.; len + shift];
    a[..len].copy_from_slice(pulse.samples());
    if delta > 0 {
        b[shift..].copy_from_slice(pulse.samples());
    } else {
        b[..len - shift].copy_from_slice(&pulse.samples()[shift..]);
    }

    let samples = a.into_iter().zip(b).map(|(a, b)| a - b).collect();
    Ok(Pulse::new(samples, pulse.samples_per_ms())?.with_mode(PulseMode::Paired))
}

/// Waveform followed by its inverse delayed by `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delayed<W: Waveform> {
    waveform: W,
    delay_ms: f64,
}

impl<W: Waveform> Delayed<W> {
    #[doc(hidden)]
    pub const fn new(waveform: W, delay_ms: f64) -> Self {
        Self { waveform, delay_ms }
    }

    /// The inter-pulse delay in milliseconds.
    pub const fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}

/// Conversion into a [`Delayed`] waveform.
pub trait IntoDelayed: Waveform + Sized {
    /// Pairs the waveform with its inverse delayed by `delay_ms`
    ///
    /// # Arguments
    ///
    /// * `delay_ms` - Inter-pulse delay \[ms\]. It is rounded to the nearest sample; a delay shorter than half a sample leaves the waveform unchanged.
    fn with_delay(self, delay_ms: f64) -> Delayed<Self>;
}

impl<W: Waveform> IntoDelayed for W {
    fn with_delay(self, delay_ms: f64) -> Delayed<Self> {
        Delayed::new(self, delay_ms)
    }
}

impl<W: Waveform> Waveform for Delayed<W> {
    fn calc(self) -> Result<Pulse, WaveformError> {
        if !self.delay_ms.is_finite() {
            return Err(WaveformError::DelayInvalid(self.delay_ms));
        }
        let pulse = self.waveform.calc()?;
        let delta = (self.delay_ms * pulse.samples_per_ms()).round() as isize;
        if delta == 0 {
            tracing::debug!("Delay of {} ms is shorter than a sample, the pulse is not paired", self.delay_ms);
            return Ok(pulse);
        }
        apply_delay(&pulse, delta)
    }

    fn shape_kind(&self) -> ShapeKind {
        self.waveform.shape_kind()
    }

    fn needs_rest_sample(&self) -> bool {
        self.waveform.needs_rest_sample()
    }
}
