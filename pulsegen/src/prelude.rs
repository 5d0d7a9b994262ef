pub use pulsegen_core::{
    defined::{DEFAULT_OVERSAMPLE, DEFAULT_PERIOD_POINTS, DEFAULT_PROFILE_NAME},
    encoding::EncodeError,
    link::{Command, Link, LinkError, Query, VoltageUnit},
    preview::{Preview, ShapeKind},
    sleep::{Sleep, SpinSleeper, SpinWaitSleeper, StdSleeper},
    waveform::{Pulse, PulseMode, Waveform, WaveformError},
};

#[cfg(feature = "link-nop")]
pub use crate::link::Nop;
pub use crate::{
    controller::{
        BurstOption, Controller, ControllerOption, ControllerState, Playback, TriggerState,
    },
    encoder::{encode, EncodedWaveform, StartLevel},
    error::PulseGenError,
    preview::preview,
    waveform::{
        apply_delay, build_pulse, Biphasic, Delayed, IntoDelayed, ModelFunction, SegmentShape,
    },
};
