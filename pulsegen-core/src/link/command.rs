use derive_more::{Display, From};

/// The unit of the output amplitude.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoltageUnit {
    /// Peak-to-peak volts.
    #[default]
    #[display("VPP")]
    Vpp,
    /// Root-mean-square volts.
    #[display("VRMS")]
    Vrms,
    /// Decibels relative to one milliwatt.
    #[display("DBM")]
    Dbm,
}

/// An argument of a setter command.
///
/// Values read back from the instrument are echoed verbatim through [`Value::Echo`],
/// since their textual form is instrument specific.
#[derive(Debug, Display, Clone, PartialEq, From)]
pub enum Value {
    /// A number formatted by [`Display`](core::fmt::Display).
    #[display("{}", _0)]
    Number(f64),
    /// A token sent as is.
    #[display("{}", _0)]
    Echo(String),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Echo(value.to_owned())
    }
}

/// A command without reply.
#[derive(Debug, Display, Clone, PartialEq)]
#[non_exhaustive]
pub enum Command {
    /// Writes comma separated samples into volatile memory.
    #[display("DATA VOLATILE, {}", _0)]
    DataVolatile(String),
    /// Copies volatile memory into the named profile.
    #[display("DATA:COPY {}, VOLATILE", _0)]
    DataCopy(String),
    /// Selects the named profile as the active user waveform.
    #[display("FUNC:USER {}", _0)]
    FuncUser(String),
    /// Selects the output function.
    #[display("FUNC {}", _0)]
    Func(Value),
    /// Sets the output frequency in Hz.
    #[display("FREQ {}", _0)]
    Freq(f64),
    /// Sets the output amplitude.
    #[display("VOLT {}", _0)]
    Volt(Value),
    /// Sets the amplitude unit.
    #[display("VOLT:UNIT {}", _0)]
    VoltUnit(VoltageUnit),
    /// Sets the DC offset.
    #[display("VOLT:OFFS {}", _0)]
    VoltOffset(Value),
    /// Sets the number of cycles emitted per burst.
    #[display("BURS:NCYC {}", _0)]
    BurstCycles(u32),
    /// Sets the start phase of a burst in degrees.
    #[display("BURS:PHAS {}", _0)]
    BurstPhase(f64),
    /// Selects the triggered burst mode.
    #[display("BURS:MODE TRIG")]
    BurstModeTrigger,
    /// Selects the bus as the trigger source.
    #[display("TRIG:SOUR BUS")]
    TriggerSourceBus,
    /// Enables or disables the burst mode.
    #[display("BURS:STAT {}", if *_0 { "ON" } else { "OFF" })]
    BurstState(bool),
    /// Fires a bus trigger.
    #[display("*TRG")]
    Trigger,
    /// Toggles the output relay.
    #[display("OUTP {}", if *_0 { "ON" } else { "OFF" })]
    Output(bool),
}

/// A command that expects a reply.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Reads the output function.
    #[display("FUNC?")]
    Func,
    /// Reads the output amplitude.
    #[display("VOLT?")]
    Volt,
    /// Reads the DC offset.
    #[display("VOLT:OFFS?")]
    VoltOffset,
}
