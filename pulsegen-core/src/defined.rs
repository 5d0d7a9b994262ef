use core::time::Duration;

/// The name of the instrument profile slot every upload is written to.
pub const DEFAULT_PROFILE_NAME: &str = "SYNPULSE";

/// The wait after a waveform upload before any further command is issued.
pub const UPLOAD_SETTLE: Duration = Duration::from_secs(8);

/// The wait after the burst arming sequence.
pub const ARM_SETTLE: Duration = Duration::from_secs(6);

/// Default number of logical samples in one period. One logical sample spans one millisecond.
pub const DEFAULT_PERIOD_POINTS: usize = 10;

/// Default number of physical samples per logical sample.
pub const DEFAULT_OVERSAMPLE: usize = 10;

/// Number of decimal digits of an encoded sample.
pub const ENCODING_PRECISION: usize = 6;

/// Number of milliseconds in one second.
pub const MILLIS_PER_SECOND: f64 = 1000.;
