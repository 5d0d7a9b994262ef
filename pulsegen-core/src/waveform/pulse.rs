use derive_more::Deref;

use super::WaveformError;

/// Whether a pulse is a single pulse or a pulse followed by its delayed inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PulseMode {
    /// The pulse is played as is.
    #[default]
    Single,
    /// The pulse minus a copy shifted by the inter-pulse delay.
    Paired,
}

/// Samples of one period at a uniform sample rate.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Pulse {
    #[deref]
    samples: Vec<f64>,
    samples_per_ms: f64,
    mode: PulseMode,
}

impl Pulse {
    /// Creates a new single [`Pulse`].
    ///
    /// # Errors
    ///
    /// Returns [`WaveformError`] if there are fewer than two samples, a sample is not finite,
    /// or `samples_per_ms` is not positive.
    pub fn new(samples: Vec<f64>, samples_per_ms: f64) -> Result<Self, WaveformError> {
        if !(samples_per_ms.is_finite() && samples_per_ms > 0.) {
            return Err(WaveformError::SampleRateInvalid(samples_per_ms));
        }
        if samples.len() < 2 {
            return Err(WaveformError::TooShort(samples.len()));
        }
        if let Some((i, &v)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(WaveformError::SampleInvalid(i, v));
        }
        Ok(Self {
            samples,
            samples_per_ms,
            mode: PulseMode::Single,
        })
    }

    /// Sets the [`PulseMode`].
    #[must_use]
    pub fn with_mode(mut self, mode: PulseMode) -> Self {
        self.mode = mode;
        self
    }

    /// The samples.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the pulse and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Number of samples per millisecond.
    #[must_use]
    pub const fn samples_per_ms(&self) -> f64 {
        self.samples_per_ms
    }

    /// The [`PulseMode`].
    #[must_use]
    pub const fn mode(&self) -> PulseMode {
        self.mode
    }

    /// Duration of the pulse in milliseconds.
    #[must_use]
    pub fn period_ms(&self) -> f64 {
        self.samples.len() as f64 / self.samples_per_ms
    }

    /// The smallest sample.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// The largest sample.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
