use pulsegen_core::link::{Command, Link, LinkError, Query, Value};

use super::session::LinkSession;

/// Output settings read back before a reset.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Readback {
    func: String,
    volt: String,
    offset: String,
}

impl Readback {
    pub(crate) fn query<L: Link>(session: &mut LinkSession<'_, L>) -> Result<Self, LinkError> {
        Ok(Self {
            func: Self::read(session, Query::Func)?,
            volt: Self::read(session, Query::Volt)?,
            offset: Self::read(session, Query::VoltOffset)?,
        })
    }

    fn read<L: Link>(session: &mut LinkSession<'_, L>, query: Query) -> Result<String, LinkError> {
        let reply = session.query(query)?;
        if reply.is_empty() {
            return Err(LinkError::new(format!("Empty reply to {}", query)));
        }
        Ok(reply)
    }
}

/// Holds the output at a DC level and restores the read back settings afterwards.
///
/// If the guard is dropped without [`DcOverride::restore`], restoration is still attempted.
pub(crate) struct DcOverride<'s, 'l, L: Link> {
    session: &'s mut LinkSession<'l, L>,
    readback: Readback,
    restored: bool,
}

impl<'s, 'l, L: Link> DcOverride<'s, 'l, L> {
    const DC: &'static str = "DC";

    pub(crate) fn engage(
        session: &'s mut LinkSession<'l, L>,
        readback: Readback,
        level: f64,
    ) -> Result<Self, LinkError> {
        let mut guard = Self {
            session,
            readback,
            restored: false,
        };
        guard.session.send(Command::BurstState(false))?;
        guard.session.send(Command::Func(Self::DC.into()))?;
        guard.session.send(Command::VoltOffset(level.into()))?;
        Ok(guard)
    }

    pub(crate) fn restore(mut self) -> Result<(), LinkError> {
        self.restore_impl()
    }

    fn restore_impl(&mut self) -> Result<(), LinkError> {
        self.restored = true;
        let Readback { func, volt, offset } = self.readback.clone();
        self.session.send(Command::Func(Value::Echo(func)))?;
        self.session.send(Command::Volt(Value::Echo(volt)))?;
        self.session.send(Command::VoltOffset(Value::Echo(offset)))?;
        self.session.send(Command::BurstState(true))
    }
}

impl<L: Link> Drop for DcOverride<'_, '_, L> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        tracing::warn!("Reset was interrupted, restoring the output settings");
        if let Err(e) = self.restore_impl() {
            tracing::warn!("Failed to restore the output settings: {}", e);
        }
    }
}
