use getset::{CopyGetters, Getters};
use itertools::Itertools;
use pulsegen_core::{defined::ENCODING_PRECISION, encoding::EncodeError, waveform::Pulse};

/// The physical level the first sample of an encoded pulse starts at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartLevel {
    /// The first sample keeps its own value.
    #[default]
    Natural,
    /// The first sample is overwritten with the given physical level.
    Pinned(f64),
}

/// A pulse normalized into `[-1, 1]` together with the scale and offset that reconstruct it.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct EncodedWaveform {
    /// Normalized samples formatted with [`ENCODING_PRECISION`] decimal digits.
    #[getset(get = "pub")]
    data: Vec<String>,
    /// Peak-to-peak amplitude, `max - min`.
    #[getset(get_copy = "pub")]
    amplitude_vpp: f64,
    /// DC offset, `(max + min) / 2`.
    #[getset(get_copy = "pub")]
    offset: f64,
}

impl EncodedWaveform {
    const REST_SAMPLE: f64 = 0.;

    /// Comma separated samples as written to the instrument.
    #[must_use]
    pub fn csv(&self) -> String {
        self.data.join(",")
    }

    /// Reconstructs the physical levels.
    ///
    /// Samples that cannot be parsed are skipped.
    #[must_use]
    pub fn decode(&self) -> Vec<f64> {
        self.data
            .iter()
            .filter_map(|s| s.parse::<f64>().ok())
            .map(|v| v * self.amplitude_vpp / 2. + self.offset)
            .collect()
    }

    /// Prepends a rest sample at the normalized zero level.
    #[must_use]
    pub fn with_rest_sample(mut self) -> Self {
        self.data.insert(0, format_sample(Self::REST_SAMPLE));
        self
    }
}

fn format_sample(v: f64) -> String {
    let s = format!("{:.*}", ENCODING_PRECISION, v);
    match s.strip_prefix('-') {
        Some(abs) if abs.chars().all(|c| c == '0' || c == '.') => abs.to_owned(),
        _ => s,
    }
}

/// Normalizes `pulse` into `[-1, 1]`.
///
/// # Errors
///
/// Returns [`EncodeError::ZeroAmplitude`] if the pulse is constant and [`EncodeError::PinOutOfRange`]
/// if a pinned start level is outside the range of the pulse.
///
/// # Examples
///
/// ```
/// # use pulsegen::{encoder::{encode, StartLevel}, waveform::build_pulse};
/// let pulse = build_pulse(2.0, 1.0, 3., 7., 10, 1).unwrap();
/// let encoded = encode(&pulse, StartLevel::Natural).unwrap();
/// assert_eq!(3., encoded.amplitude_vpp());
/// assert_eq!(0.5, encoded.offset());
/// assert_eq!("1.000000", encoded.data()[0]);
/// ```
pub fn encode(pulse: &Pulse, start: StartLevel) -> Result<EncodedWaveform, EncodeError> {
    let (min, max) = (pulse.min(), pulse.max());
    if max == min {
        return Err(EncodeError::ZeroAmplitude(max));
    }
    let amplitude_vpp = max - min;
    let offset = (max + min) / 2.;
    let normalize = |v: f64| ((v - offset) / (amplitude_vpp / 2.)).clamp(-1., 1.);

    let mut normalized = pulse.iter().copied().map(normalize).collect_vec();
    if let StartLevel::Pinned(level) = start {
        if !(min..=max).contains(&level) {
            return Err(EncodeError::PinOutOfRange(level, min, max));
        }
        normalized[0] = normalize(level);
    }

    Ok(EncodedWaveform {
        data: normalized.into_iter().map(format_sample).collect(),
        amplitude_vpp,
        offset,
    })
}
