/// The shape of one segment of a [`Biphasic`] pulse.
///
/// [`Biphasic`]: crate::waveform::Biphasic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentShape {
    /// Constant at the segment amplitude.
    #[default]
    Square,
    /// Linear rise to the segment amplitude at the midpoint of the segment and linear fall back.
    Triangle,
    /// Decay from the segment amplitude with a time constant of a fifth of the segment.
    Exponential,
}

impl SegmentShape {
    const EXP_TIME_CONSTANT_RATIO: f64 = 0.2;

    /// Value of a segment with `amplitude` and `duration` at `t` milliseconds after its start.
    #[must_use]
    pub fn eval(self, amplitude: f64, t: f64, duration: f64) -> f64 {
        match self {
            SegmentShape::Square => amplitude,
            SegmentShape::Triangle => {
                let x = ((t + 0.5) / duration).min(1.);
                amplitude * (1. - (2. * x - 1.).abs())
            }
            SegmentShape::Exponential => {
                amplitude * (-t / (duration * Self::EXP_TIME_CONSTANT_RATIO)).exp()
            }
        }
    }
}
