use super::error::LinkError;

/// A trait that provides the command channel to the instrument.
///
/// Commands and queries are plain ASCII lines. Framing, termination and the
/// physical transport belong to the implementor.
pub trait Link: Send {
    /// Opens the link.
    fn open(&mut self) -> Result<(), LinkError>;

    /// Closes the link.
    fn close(&mut self) -> Result<(), LinkError>;

    /// Sends a command that has no reply.
    fn send(&mut self, command: &str) -> Result<(), LinkError>;

    /// Sends a command and reads its reply.
    fn query(&mut self, command: &str) -> Result<String, LinkError>;

    /// Checks if the link is open.
    #[must_use]
    fn is_open(&self) -> bool;

    /// Returns [`LinkError::closed`] if the link is not open.
    fn ensure_is_open(&self) -> Result<(), LinkError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(LinkError::closed())
        }
    }
}

impl Link for Box<dyn Link> {
    fn open(&mut self) -> Result<(), LinkError> {
        self.as_mut().open()
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.as_mut().close()
    }

    fn send(&mut self, command: &str) -> Result<(), LinkError> {
        self.as_mut().send(command)
    }

    fn query(&mut self, command: &str) -> Result<String, LinkError> {
        self.as_mut().query(command)
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }
}
