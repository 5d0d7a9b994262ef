use derive_more::Display;
use derive_new::new;
use thiserror::Error;

#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
/// An error produced by the link.
pub struct LinkError {
    #[new(into)]
    msg: String,
}

impl LinkError {
    /// Creates a [`LinkError`] reporting that the link is not open.
    #[must_use]
    pub fn closed() -> Self {
        Self::new("Link is closed")
    }
}

// GRCOV_EXCL_START
impl From<std::io::Error> for LinkError {
    fn from(err: std::io::Error) -> Self {
        LinkError::new(err.to_string())
    }
}
// GRCOV_EXCL_STOP
