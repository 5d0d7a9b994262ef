use std::time::Duration;

use derive_new::new;
use pulsegen_core::{
    defined::{ARM_SETTLE, DEFAULT_PROFILE_NAME, UPLOAD_SETTLE},
    sleep::{Sleep, StdSleeper},
};

use crate::encoder::StartLevel;

/// How an uploaded profile is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Playback {
    /// The profile is only uploaded and selected. The trigger is not armed.
    Continuous,
    /// The profile is armed for bus-triggered bursts.
    #[default]
    Burst,
}

/// The burst settings applied when arming.
#[derive(Debug, Clone, Copy, PartialEq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurstOption {
    /// The number of periods emitted per trigger.
    pub cycles: u32,
    /// The start phase in degrees.
    pub phase: f64,
}

impl Default for BurstOption {
    fn default() -> Self {
        Self::new(1, 0.)
    }
}

/// The option of [`Controller`].
///
/// [`Controller`]: crate::Controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerOption<S: Sleep = StdSleeper> {
    /// The profile every waveform is uploaded to.
    pub profile_name: String,
    /// The wait after an upload.
    pub upload_settle: Duration,
    /// The wait after arming.
    pub arm_settle: Duration,
    /// The burst settings.
    pub burst: BurstOption,
    /// The level the first sample is encoded at.
    ///
    /// Waveforms uploaded with a leading rest sample are always encoded with [`StartLevel::Natural`],
    /// since their first sample is the rest sample.
    pub start_level: StartLevel,
    /// The sleeper to wait the settle durations.
    pub sleeper: S,
}

impl<S: Sleep + Default> Default for ControllerOption<S> {
    fn default() -> Self {
        Self {
            profile_name: DEFAULT_PROFILE_NAME.to_owned(),
            upload_settle: UPLOAD_SETTLE,
            arm_settle: ARM_SETTLE,
            burst: BurstOption::default(),
            start_level: StartLevel::Pinned(0.),
            sleeper: S::default(),
        }
    }
}
