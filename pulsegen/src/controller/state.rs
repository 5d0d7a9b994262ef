/// The phase of the profile the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// No sequence is running and the instrument is not armed.
    #[default]
    Idle,
    /// A waveform upload is in progress.
    Uploading,
    /// The profile is armed for burst playback.
    Armed,
}

/// Whether a bus trigger may be fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    /// Firing is rejected.
    #[default]
    Disarmed,
    /// The burst sequence completed and a trigger fires the profile.
    Armed,
}

impl TriggerState {
    /// Returns `true` if a trigger may be fired.
    #[must_use]
    pub const fn is_armed(self) -> bool {
        matches!(self, TriggerState::Armed)
    }
}
