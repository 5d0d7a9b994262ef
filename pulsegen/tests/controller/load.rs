use std::time::Duration;

use pulsegen::{
    controller::playback_frequency,
    link::{Audit, AuditOption},
    prelude::*,
};

use crate::create_controller;

fn burst_commands(csv: &str, frequency: f64, vpp: f64, offset: f64) -> Vec<String> {
    [
        Command::DataVolatile(csv.to_owned()),
        Command::DataCopy(DEFAULT_PROFILE_NAME.to_owned()),
        Command::FuncUser(DEFAULT_PROFILE_NAME.to_owned()),
        Command::Freq(frequency),
        Command::Volt(vpp.into()),
        Command::VoltUnit(VoltageUnit::Vpp),
        Command::VoltOffset(offset.into()),
        Command::FuncUser(DEFAULT_PROFILE_NAME.to_owned()),
        Command::BurstCycles(1),
        Command::BurstPhase(0.),
        Command::BurstModeTrigger,
        Command::TriggerSourceBus,
        Command::BurstState(true),
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn burst() -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());

    cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Burst)?;

    let encoded = encode(
        &build_pulse(2.0, 1.0, 3., 7., 10, 10)?,
        StartLevel::Pinned(0.),
    )?;
    assert_eq!("-0.333333", encoded.data()[0]);
    assert_eq!("1.000000", encoded.data()[1]);
    assert_eq!("-1.000000", encoded.data()[99]);
    assert_eq!(
        burst_commands(&encoded.csv(), 1000. / 11., 3., 0.5),
        cnt.link().commands()
    );
    assert_eq!("FREQ 90.9090909090909", cnt.link().commands()[3]);
    assert_eq!("VOLT 3", cnt.link().commands()[4]);
    assert_eq!("VOLT:OFFS 0.5", cnt.link().commands()[6]);

    assert_eq!(ControllerState::Armed, cnt.state());
    assert_eq!(TriggerState::Armed, cnt.trigger());
    assert_eq!(1, cnt.link().open_count());
    assert_eq!(1, cnt.link().close_count());
    assert!(!cnt.link().is_open());

    Ok(())
}

#[test]
fn continuous() -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());

    cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Continuous)?;

    assert_eq!(
        &[
            "DATA:COPY SYNPULSE, VOLATILE".to_owned(),
            "FUNC:USER SYNPULSE".to_owned()
        ],
        &cnt.link().commands()[1..]
    );
    assert!(cnt.link().commands()[0].starts_with("DATA VOLATILE, -0.333333,1.000000,"));
    assert_eq!(ControllerState::Idle, cnt.state());
    assert_eq!(TriggerState::Disarmed, cnt.trigger());

    Ok(())
}

#[test]
fn continuous_after_burst_disarms() -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());

    cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Burst)?;
    cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Continuous)?;

    assert_eq!(TriggerState::Disarmed, cnt.trigger());
    assert_eq!(Err(PulseGenError::TriggerNotArmed), cnt.fire_trigger());

    Ok(())
}

#[test]
fn delayed() -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());

    let waveform = Biphasic::new(2.0, 1.0, 3., 7.).with_delay(2.);
    let pulse = waveform.calc()?;
    assert_eq!(120, pulse.len());
    assert_eq!(PulseMode::Paired, pulse.mode());

    cnt.load_profile(waveform, Playback::Burst)?;

    let encoded = encode(&pulse, StartLevel::Pinned(0.))?;
    assert_eq!(
        burst_commands(
            &encoded.csv(),
            1000. / 12.,
            encoded.amplitude_vpp(),
            encoded.offset()
        ),
        cnt.link().commands()
    );
    approx::assert_abs_diff_eq!(1000. / 12., playback_frequency(&pulse));

    Ok(())
}

#[test]
fn model_function() -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());

    cnt.load_profile(
        ModelFunction::new(|t| t * (-t).exp(), 0., 5., 100, 10.),
        Playback::Burst,
    )?;

    let data = &cnt.link().commands()[0];
    let samples = data
        .strip_prefix("DATA VOLATILE, ")
        .map(|csv| csv.split(',').collect::<Vec<_>>())
        .unwrap_or_default();
    assert_eq!(101, samples.len());
    assert_eq!("0.000000", samples[0]);
    assert_eq!(Command::Freq(1000. / 11.).to_string(), cnt.link().commands()[3]);

    Ok(())
}

#[test]
fn model_function_off_zero() -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());

    cnt.load_profile(ModelFunction::new(|x| x + 1., 0., 1., 11, 10.), Playback::Burst)?;

    let commands = cnt.link().commands();
    assert!(commands[0].starts_with("DATA VOLATILE, 0.000000,-1.000000,"));
    assert!(commands[0].ends_with(",1.000000"));
    assert_eq!(Command::Volt(1.0.into()).to_string(), commands[4]);
    assert_eq!(Command::VoltOffset(1.5.into()).to_string(), commands[6]);

    Ok(())
}

#[test]
fn natural_start_level() -> anyhow::Result<()> {
    let option: ControllerOption = ControllerOption {
        upload_settle: Duration::ZERO,
        arm_settle: Duration::ZERO,
        start_level: StartLevel::Natural,
        profile_name: "PULSE".to_owned(),
        burst: BurstOption::new(3, 90.),
        ..Default::default()
    };
    let mut cnt = Controller::with_option(Audit::new(AuditOption::default()), option);

    cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Burst)?;

    let commands = cnt.link().commands();
    assert!(commands[0].starts_with("DATA VOLATILE, 1.000000,"));
    assert_eq!("DATA:COPY PULSE, VOLATILE", commands[1]);
    assert_eq!("FUNC:USER PULSE", commands[2]);
    assert_eq!("FUNC:USER PULSE", commands[7]);
    assert_eq!("BURS:NCYC 3", commands[8]);
    assert_eq!("BURS:PHAS 90", commands[9]);

    Ok(())
}

#[rstest::rstest]
#[test]
#[case(
    PulseGenError::Waveform(WaveformError::EmptyPeriod),
    Biphasic::new(2.0, 1.0, 0., 0.)
)]
#[case(
    PulseGenError::Waveform(WaveformError::PeriodPointsInvalid(0)),
    Biphasic::new(2.0, 1.0, 3., 7.).with_period_points(0)
)]
#[case(
    PulseGenError::Encode(EncodeError::ZeroAmplitude(0.)),
    Biphasic::new(0., 0., 3., 7.)
)]
#[case(
    PulseGenError::Encode(EncodeError::PinOutOfRange(0., 1., 2.)),
    Biphasic::new(2.0, -1.0, 3., 7.)
)]
fn invalid(#[case] expect: PulseGenError, #[case] waveform: Biphasic) {
    let mut cnt = create_controller(AuditOption::default());

    assert_eq!(Err(expect), cnt.load_profile(waveform, Playback::Burst));

    assert!(cnt.link().commands().is_empty());
    assert_eq!(0, cnt.link().open_count());
    assert_eq!(ControllerState::Idle, cnt.state());
    assert_eq!(TriggerState::Disarmed, cnt.trigger());
}

#[rstest::rstest]
#[test]
fn transport_failure(#[values(0, 1, 2, 3, 6, 9, 12)] index: usize) -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());
    cnt.link_mut().fail_at(index);

    assert!(matches!(
        cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Burst),
        Err(PulseGenError::Link(_))
    ));

    assert_eq!(index, cnt.link().commands().len());
    assert_eq!(ControllerState::Idle, cnt.state());
    assert_eq!(TriggerState::Disarmed, cnt.trigger());
    assert_eq!(1, cnt.link().open_count());
    assert_eq!(1, cnt.link().close_count());
    assert!(!cnt.link().is_open());

    Ok(())
}

#[test]
fn transport_failure_keeps_armed() -> anyhow::Result<()> {
    let mut cnt = create_controller(AuditOption::default());
    cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Burst)?;

    cnt.link_mut().fail_at(13 + 1);
    assert!(cnt
        .load_profile(Biphasic::new(1.0, 1.0, 2., 2.), Playback::Continuous)
        .is_err());
    assert_eq!(ControllerState::Armed, cnt.state());
    assert_eq!(TriggerState::Armed, cnt.trigger());

    cnt.link_mut().break_down();
    assert_eq!(
        Err(PulseGenError::Link(LinkError::new("broken"))),
        cnt.load_profile(Biphasic::new(1.0, 1.0, 2., 2.), Playback::Burst)
    );
    assert_eq!(TriggerState::Armed, cnt.trigger());

    cnt.link_mut().repair();
    cnt.fire_trigger()?;
    assert_eq!(Some(&"*TRG".to_owned()), cnt.link().commands().last());

    Ok(())
}
