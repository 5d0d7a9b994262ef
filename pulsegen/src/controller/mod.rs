mod option;
mod reset;
mod session;
mod state;

use std::time::Duration;

use pulsegen_core::{
    defined::MILLIS_PER_SECOND,
    link::{Command, Link, LinkError, VoltageUnit},
    sleep::{Sleep, StdSleeper},
    waveform::{Pulse, PulseMode, Waveform, WaveformError},
};

use crate::{
    encoder::{encode, EncodedWaveform, StartLevel},
    error::PulseGenError,
};

pub use option::{BurstOption, ControllerOption, Playback};
pub use state::{ControllerState, TriggerState};

use reset::{DcOverride, Readback};
use session::LinkSession;

/// Playback frequency of `pulse` in Hz.
///
/// A single pulse is followed by one millisecond of rest so that consecutive bursts do not merge.
#[must_use]
pub fn playback_frequency(pulse: &Pulse) -> f64 {
    let rest_ms = match pulse.mode() {
        PulseMode::Single => 1.,
        PulseMode::Paired => 0.,
    };
    MILLIS_PER_SECOND / (pulse.period_ms() + rest_ms)
}

/// A controller for a waveform generator.
///
/// Every operation opens the link, issues its command sequence and closes the link again.
///
/// # Examples
///
/// ```
/// # use pulsegen::prelude::*;
/// # fn main() -> Result<(), PulseGenError> {
/// let option: ControllerOption = ControllerOption {
///     upload_settle: std::time::Duration::ZERO,
///     arm_settle: std::time::Duration::ZERO,
///     ..Default::default()
/// };
/// let mut pulsegen = Controller::with_option(Nop::new(), option);
///
/// pulsegen.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Burst)?;
/// pulsegen.fire_trigger()?;
/// # Ok(())
/// # }
/// ```
pub struct Controller<L: Link, S: Sleep = StdSleeper> {
    link: L,
    option: ControllerOption<S>,
    state: ControllerState,
    trigger: TriggerState,
}

impl<L: Link> Controller<L, StdSleeper> {
    /// Creates a controller with the default [`ControllerOption`].
    #[must_use]
    pub fn new(link: L) -> Self {
        Self::with_option(link, ControllerOption::default())
    }
}

impl<L: Link, S: Sleep> Controller<L, S> {
    /// Creates a controller with a [`ControllerOption`].
    #[must_use]
    pub fn with_option(link: L, option: ControllerOption<S>) -> Self {
        Self {
            link,
            option,
            state: ControllerState::Idle,
            trigger: TriggerState::Disarmed,
        }
    }

    #[doc(hidden)]
    pub const fn link(&self) -> &L {
        &self.link
    }

    #[doc(hidden)]
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// The [`ControllerOption`].
    pub const fn option(&self) -> &ControllerOption<S> {
        &self.option
    }

    /// The current [`ControllerState`].
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// The current [`TriggerState`].
    pub const fn trigger(&self) -> TriggerState {
        self.trigger
    }

    /// Uploads `waveform` into the profile and, with [`Playback::Burst`], arms it for bus triggers.
    ///
    /// On failure the trigger state is left as it was before the call.
    #[tracing::instrument(level = "debug", skip(self, waveform))]
    pub fn load_profile<W: Waveform>(
        &mut self,
        waveform: W,
        playback: Playback,
    ) -> Result<(), PulseGenError> {
        let needs_rest_sample = waveform.needs_rest_sample();
        let pulse = waveform.calc()?;
        let encoded = if needs_rest_sample {
            encode(&pulse, StartLevel::Natural)?.with_rest_sample()
        } else {
            encode(&pulse, self.option.start_level)?
        };
        let frequency = playback_frequency(&pulse);

        tracing::info!(
            "Loading {} samples ({} Vpp, {} V offset) into {}",
            encoded.data().len(),
            encoded.amplitude_vpp(),
            encoded.offset(),
            self.option.profile_name
        );

        let previous = self.state;
        self.state = ControllerState::Uploading;
        match self.load_profile_impl(&encoded, frequency, playback) {
            Ok(()) => {
                (self.state, self.trigger) = match playback {
                    Playback::Burst => (ControllerState::Armed, TriggerState::Armed),
                    Playback::Continuous => (ControllerState::Idle, TriggerState::Disarmed),
                };
                tracing::info!("Profile {} loaded, trigger {:?}", self.option.profile_name, self.trigger);
                Ok(())
            }
            Err(e) => {
                self.state = previous;
                tracing::error!("Failed to load profile: {}", e);
                Err(e.into())
            }
        }
    }

    fn load_profile_impl(
        &mut self,
        encoded: &EncodedWaveform,
        frequency: f64,
        playback: Playback,
    ) -> Result<(), LinkError> {
        let option = &self.option;
        let mut session = LinkSession::open(&mut self.link)?;

        session.send(Command::DataVolatile(encoded.csv()))?;
        session.send(Command::DataCopy(option.profile_name.clone()))?;
        session.send(Command::FuncUser(option.profile_name.clone()))?;
        option.sleeper.sleep(option.upload_settle);

        if playback == Playback::Burst {
            session.send(Command::Freq(frequency))?;
            session.send(Command::Volt(encoded.amplitude_vpp().into()))?;
            session.send(Command::VoltUnit(VoltageUnit::Vpp))?;
            session.send(Command::VoltOffset(encoded.offset().into()))?;
            session.send(Command::FuncUser(option.profile_name.clone()))?;
            session.send(Command::BurstCycles(option.burst.cycles))?;
            session.send(Command::BurstPhase(option.burst.phase))?;
            session.send(Command::BurstModeTrigger)?;
            session.send(Command::TriggerSourceBus)?;
            session.send(Command::BurstState(true))?;
            option.sleeper.sleep(option.arm_settle);
        }

        session.close()
    }

    /// Fires a bus trigger.
    ///
    /// # Errors
    ///
    /// Returns [`PulseGenError::TriggerNotArmed`] without touching the link if no profile is armed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn fire_trigger(&mut self) -> Result<(), PulseGenError> {
        if !self.trigger.is_armed() {
            tracing::error!("Trigger rejected: no profile is armed");
            return Err(PulseGenError::TriggerNotArmed);
        }
        let mut session = LinkSession::open(&mut self.link)?;
        session.send(Command::Trigger)?;
        session.close()?;
        tracing::info!("Trigger fired");
        Ok(())
    }

    /// Switches the output relay. Turning the output off disarms the trigger.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_output(&mut self, on: bool) -> Result<(), PulseGenError> {
        let mut session = LinkSession::open(&mut self.link)?;
        session.send(Command::Output(on))?;
        session.close()?;
        if !on {
            self.state = ControllerState::Idle;
            self.trigger = TriggerState::Disarmed;
        }
        tracing::info!("Output {}", if on { "on" } else { "off" });
        Ok(())
    }

    /// Holds the output at `amplitude / 2` volts DC for `duration`, then restores the previous output settings
    /// and re-enables bursts.
    ///
    /// Once the DC level is applied, restoration is attempted even if a later command fails.
    ///
    /// # Errors
    ///
    /// Returns [`WaveformError::AmplitudeInvalid`] without touching the link if `amplitude` is not finite.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reset(&mut self, duration: Duration, amplitude: f64) -> Result<(), PulseGenError> {
        if !amplitude.is_finite() {
            return Err(WaveformError::AmplitudeInvalid(amplitude).into());
        }
        let level = amplitude / 2.;
        tracing::info!("Resetting at {} V for {:?}", level, duration);

        let mut session = LinkSession::open(&mut self.link)?;
        let readback = Readback::query(&mut session)?;
        let guard = DcOverride::engage(&mut session, readback, level)?;
        self.option.sleeper.sleep(duration);
        guard.restore()?;
        session.close()?;

        tracing::info!("Reset done");
        Ok(())
    }
}

impl<L: Link, S: Sleep> Drop for Controller<L, S> {
    fn drop(&mut self) {
        if !self.link.is_open() {
            return;
        }
        if let Err(e) = self.link.close() {
            tracing::warn!("Failed to close the link: {}", e);
        }
    }
}
