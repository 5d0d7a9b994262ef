use getset::CopyGetters;
use itertools::Itertools;
use pulsegen_core::{
    defined::{DEFAULT_OVERSAMPLE, DEFAULT_PERIOD_POINTS},
    preview::ShapeKind,
    waveform::{Pulse, Waveform, WaveformError},
};

use super::SegmentShape;

/// A spike segment followed by an inverted reference segment, zero-filled to the end of the period.
///
/// One logical sample spans one millisecond. Every logical sample is repeated `oversample` times,
/// so the resulting [`Pulse`] has `period_points * oversample` samples.
#[derive(Clone, Copy, PartialEq, Debug, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Biphasic {
    /// Amplitude of the spike segment.
    #[getset(get_copy = "pub")]
    spike_amplitude: f64,
    /// Amplitude of the reference segment. The segment is emitted with inverted sign.
    #[getset(get_copy = "pub")]
    ref_amplitude: f64,
    /// Duration of the spike segment in milliseconds.
    #[getset(get_copy = "pub")]
    spike_time: f64,
    /// Duration of the reference segment in milliseconds.
    #[getset(get_copy = "pub")]
    ref_time: f64,
    /// Number of logical samples in one period.
    #[getset(get_copy = "pub")]
    period_points: usize,
    /// Number of physical samples per logical sample.
    #[getset(get_copy = "pub")]
    oversample: usize,
    /// Shape of the spike segment.
    #[getset(get_copy = "pub")]
    spike_shape: SegmentShape,
    /// Shape of the reference segment.
    #[getset(get_copy = "pub")]
    ref_shape: SegmentShape,
}

impl Biphasic {
    /// Creates a new square-square [`Biphasic`] pulse with [`DEFAULT_PERIOD_POINTS`] and [`DEFAULT_OVERSAMPLE`].
    ///
    /// # Arguments
    ///
    /// * `spike_amplitude` - Amplitude of the spike segment
    /// * `ref_amplitude` - Amplitude of the reference segment
    /// * `spike_time` - Duration of the spike segment \[ms\]
    /// * `ref_time` - Duration of the reference segment \[ms\]
    #[must_use]
    pub const fn new(spike_amplitude: f64, ref_amplitude: f64, spike_time: f64, ref_time: f64) -> Self {
        Self {
            spike_amplitude,
            ref_amplitude,
            spike_time,
            ref_time,
            period_points: DEFAULT_PERIOD_POINTS,
            oversample: DEFAULT_OVERSAMPLE,
            spike_shape: SegmentShape::Square,
            ref_shape: SegmentShape::Square,
        }
    }

    /// Sets the number of logical samples in one period.
    #[must_use]
    pub const fn with_period_points(mut self, period_points: usize) -> Self {
        self.period_points = period_points;
        self
    }

    /// Sets the number of physical samples per logical sample.
    #[must_use]
    pub const fn with_oversample(mut self, oversample: usize) -> Self {
        self.oversample = oversample;
        self
    }

    /// Sets the shape of the spike segment.
    #[must_use]
    pub const fn with_spike_shape(mut self, shape: SegmentShape) -> Self {
        self.spike_shape = shape;
        self
    }

    /// Sets the shape of the reference segment.
    #[must_use]
    pub const fn with_ref_shape(mut self, shape: SegmentShape) -> Self {
        self.ref_shape = shape;
        self
    }

    fn validate(&self) -> Result<(), WaveformError> {
        if let Some(a) = [self.spike_amplitude, self.ref_amplitude]
            .into_iter()
            .find(|a| !a.is_finite())
        {
            return Err(WaveformError::AmplitudeInvalid(a));
        }
        if let Some(t) = [self.spike_time, self.ref_time]
            .into_iter()
            .find(|t| !(t.is_finite() && *t >= 0.))
        {
            return Err(WaveformError::TimeInvalid(t));
        }
        if self.spike_time + self.ref_time <= 0. {
            return Err(WaveformError::EmptyPeriod);
        }
        if self.period_points < 1 {
            return Err(WaveformError::PeriodPointsInvalid(self.period_points));
        }
        if self.oversample < 1 {
            return Err(WaveformError::OversampleInvalid(self.oversample));
        }
        Ok(())
    }

    fn logical_sample(&self, i: usize) -> f64 {
        let t = i as f64;
        let ref_end = self.spike_time + self.ref_time;
        if t < self.spike_time {
            self.spike_shape
                .eval(self.spike_amplitude, t, self.spike_time)
        } else if t < ref_end {
            -self
                .ref_shape
                .eval(self.ref_amplitude, t - self.spike_time, self.ref_time)
        } else {
            0.
        }
    }
}

impl Waveform for Biphasic {
    fn calc(self) -> Result<Pulse, WaveformError> {
        self.validate()?;

        if self.spike_time + self.ref_time > self.period_points as f64 {
            tracing::warn!(
                "Pulse ({} ms + {} ms) is longer than the period ({} ms) and will be truncated.",
                self.spike_time,
                self.ref_time,
                self.period_points
            );
        }

        let samples = (0..self.period_points)
            .map(|i| self.logical_sample(i))
            .flat_map(|v| itertools::repeat_n(v, self.oversample))
            .collect_vec();
        Pulse::new(samples, self.oversample as f64)
    }

    fn shape_kind(&self) -> ShapeKind {
        match (self.spike_shape, self.ref_shape) {
            (SegmentShape::Square, SegmentShape::Square) => ShapeKind::Stepped,
            _ => ShapeKind::Continuous,
        }
    }
}

/// Builds a square-square [`Biphasic`] pulse.
///
/// # Examples
///
/// ```
/// # use pulsegen::waveform::build_pulse;
/// let pulse = build_pulse(2.0, 1.0, 3., 7., 10, 1).unwrap();
/// assert_eq!(&[2., 2., 2., -1., -1., -1., -1., -1., -1., -1.], pulse.samples());
/// ```
pub fn build_pulse(
    spike_amplitude: f64,
    ref_amplitude: f64,
    spike_time: f64,
    ref_time: f64,
    period_points: usize,
    oversample: usize,
) -> Result<Pulse, WaveformError> {
    Biphasic::new(spike_amplitude, ref_amplitude, spike_time, ref_time)
        .with_period_points(period_points)
        .with_oversample(oversample)
        .calc()
}
