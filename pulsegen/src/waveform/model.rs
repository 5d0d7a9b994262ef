use derive_more::Debug;
use itertools::Itertools;
use pulsegen_core::{
    preview::ShapeKind,
    waveform::{Pulse, Waveform, WaveformError},
};

/// A pulse sampled from an arbitrary model function.
///
/// The function is evaluated at `num_samples` evenly spaced points over `[start, end]`, both inclusive.
/// The encoded data of a model function needs a leading rest sample, see [`Waveform::needs_rest_sample`].
#[derive(Debug, Clone)]
pub struct ModelFunction<F: Fn(f64) -> f64> {
    #[debug(skip)]
    f: F,
    start: f64,
    end: f64,
    num_samples: usize,
    period_ms: f64,
}

impl<F: Fn(f64) -> f64> ModelFunction<F> {
    /// Creates a new [`ModelFunction`].
    ///
    /// # Arguments
    ///
    /// * `f` - The model function
    /// * `start` - First sampling point
    /// * `end` - Last sampling point
    /// * `num_samples` - Number of samples
    /// * `period_ms` - Duration of the pulse \[ms\]
    #[must_use]
    pub const fn new(f: F, start: f64, end: f64, num_samples: usize, period_ms: f64) -> Self {
        Self {
            f,
            start,
            end,
            num_samples,
            period_ms,
        }
    }

    /// The sampling points.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let step = if self.num_samples > 1 {
            (self.end - self.start) / (self.num_samples - 1) as f64
        } else {
            0.
        };
        (0..self.num_samples).map(move |i| self.start + step * i as f64)
    }
}

impl<F: Fn(f64) -> f64> Waveform for ModelFunction<F> {
    fn calc(self) -> Result<Pulse, WaveformError> {
        if !(self.start.is_finite() && self.end.is_finite() && self.start < self.end) {
            return Err(WaveformError::IntervalInvalid(self.start, self.end));
        }
        if !(self.period_ms.is_finite() && self.period_ms > 0.) {
            return Err(WaveformError::TimeInvalid(self.period_ms));
        }
        let samples = self.points().map(&self.f).collect_vec();
        Pulse::new(samples, self.num_samples as f64 / self.period_ms)
    }

    fn shape_kind(&self) -> ShapeKind {
        ShapeKind::Continuous
    }

    fn needs_rest_sample(&self) -> bool {
        true
    }
}
