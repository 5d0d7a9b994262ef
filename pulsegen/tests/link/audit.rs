use pulsegen::{
    link::{Audit, AuditOption},
    prelude::*,
};

#[test]
fn audit_test() -> anyhow::Result<()> {
    let mut link = Audit::new(AuditOption::default());
    assert_eq!(Err(LinkError::closed()), link.send("*TRG"));
    assert_eq!(Err(LinkError::closed()), link.query("FUNC?"));

    link.open()?;
    link.send("OUTP ON")?;
    assert_eq!("USER", link.query("FUNC?")?);
    assert_eq!(
        Err(LinkError::new("no reply for *IDN?")),
        link.query("*IDN?")
    );

    link.set_reply(Query::Func, "SQU");
    assert_eq!("SQU", link.query("FUNC?")?);

    assert_eq!(&["OUTP ON"], link.commands());
    assert_eq!(&["OUTP ON", "FUNC?", "FUNC?"], link.history());

    link.clear();
    assert!(link.history().is_empty());

    link.close()?;
    assert_eq!(1, link.open_count());
    assert_eq!(1, link.close_count());

    Ok(())
}

#[test]
fn break_down() -> anyhow::Result<()> {
    let mut link = Audit::new(AuditOption::default());
    link.open()?;

    link.break_down();
    assert_eq!(Err(LinkError::new("broken")), link.send("*TRG"));
    assert_eq!(Err(LinkError::new("broken")), link.query("VOLT?"));

    link.repair();
    link.send("*TRG")?;
    assert_eq!(&["*TRG"], link.commands());

    Ok(())
}

#[test]
fn broken_on_open() -> anyhow::Result<()> {
    let mut link = Audit::new(AuditOption { broken: true });
    link.open()?;
    assert_eq!(Err(LinkError::new("broken")), link.send("*TRG"));
    Ok(())
}

#[test]
fn fail_at() -> anyhow::Result<()> {
    let mut link = Audit::new(AuditOption::default());
    link.open()?;
    link.fail_at(1);

    link.send("OUTP ON")?;
    assert_eq!(
        Err(LinkError::new("failed to send *TRG")),
        link.send("*TRG")
    );
    link.send("*TRG")?;

    assert_eq!(&["OUTP ON", "*TRG"], link.commands());

    Ok(())
}

#[test]
fn boxed() -> anyhow::Result<()> {
    let mut cnt = Controller::with_option(
        Box::new(Nop::new()) as Box<dyn Link>,
        ControllerOption::<StdSleeper> {
            upload_settle: std::time::Duration::ZERO,
            arm_settle: std::time::Duration::ZERO,
            ..Default::default()
        },
    );
    cnt.load_profile(Biphasic::new(2.0, 1.0, 3., 7.), Playback::Burst)?;
    cnt.fire_trigger()?;
    cnt.reset(std::time::Duration::ZERO, 1.)?;
    assert!(!cnt.link().is_open());
    Ok(())
}
