#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for pulsegen.

/// Common constants.
pub mod defined;
/// Errors produced while encoding a pulse for the instrument.
pub mod encoding;
/// A interface to the instrument.
pub mod link;
/// Preview of a pulse before it is uploaded.
pub mod preview;
/// Sleep strategies for settle delays.
pub mod sleep;
/// Core traits and types for waveforms.
pub mod waveform;
