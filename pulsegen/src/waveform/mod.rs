mod biphasic;
mod delay;
mod model;
mod segment;

pub use biphasic::{build_pulse, Biphasic};
pub use delay::{apply_delay, Delayed, IntoDelayed};
pub use model::ModelFunction;
pub use segment::SegmentShape;
