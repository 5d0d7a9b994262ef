use pulsegen_core::link::{Command, Link, LinkError, Query};

/// An open link for the duration of one controller operation.
///
/// The link is closed by [`LinkSession::close`] or, on early return, when the session is dropped.
pub(crate) struct LinkSession<'a, L: Link> {
    link: &'a mut L,
    closed: bool,
}

impl<'a, L: Link> LinkSession<'a, L> {
    pub(crate) fn open(link: &'a mut L) -> Result<Self, LinkError> {
        link.open()?;
        Ok(Self {
            link,
            closed: false,
        })
    }

    pub(crate) fn send(&mut self, command: Command) -> Result<(), LinkError> {
        tracing::debug!("send: {}", command);
        self.link.send(&command.to_string())
    }

    pub(crate) fn query(&mut self, query: Query) -> Result<String, LinkError> {
        let reply = self.link.query(&query.to_string())?;
        let reply = reply.trim().to_owned();
        tracing::debug!("query: {} -> {}", query, reply);
        Ok(reply)
    }

    pub(crate) fn close(mut self) -> Result<(), LinkError> {
        self.closed = true;
        self.link.close()
    }
}

impl<L: Link> Drop for LinkSession<'_, L> {
    fn drop(&mut self) {
        if self.closed || !self.link.is_open() {
            return;
        }
        if let Err(e) = self.link.close() {
            tracing::warn!("Failed to close the link: {}", e);
        }
    }
}
