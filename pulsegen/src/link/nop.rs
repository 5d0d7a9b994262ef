use pulsegen_core::link::{Link, LinkError};

/// A [`Link`] that does nothing.
///
/// This link is mainly used for explanation. Every query replies with `0`.
#[derive(Default)]
pub struct Nop {
    is_open: bool,
}

impl Nop {
    /// Creates a new [`Nop`].
    #[must_use]
    pub const fn new() -> Self {
        Self { is_open: false }
    }
}

impl Link for Nop {
    fn open(&mut self) -> Result<(), LinkError> {
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn send(&mut self, _command: &str) -> Result<(), LinkError> {
        self.ensure_is_open()
    }

    fn query(&mut self, _command: &str) -> Result<String, LinkError> {
        self.ensure_is_open()?;
        Ok("0".to_owned())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
