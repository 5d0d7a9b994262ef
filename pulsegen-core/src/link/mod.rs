mod command;
mod error;
mod sync;

pub use command::{Command, Query, Value, VoltageUnit};
pub use error::LinkError;
#[doc(inline)]
pub use sync::*;
