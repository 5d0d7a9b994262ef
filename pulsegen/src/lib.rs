#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Synaptic pulse synthesis and burst-triggered playback on arbitrary waveform generators.
//!
//! A pulse is built from a few physical parameters, optionally paired with its delayed inverse,
//! normalized for the instrument and uploaded into a fixed profile by the [`Controller`].

/// [`Controller`] module.
pub mod controller;
/// Normalization of pulses into instrument data.
pub mod encoder;
/// Error module.
pub mod error;
/// [`Link`] implementations.
///
/// [`Link`]: pulsegen_core::link::Link
pub mod link;
/// A module containing frequently used types and traits.
pub mod prelude;
/// Waveform implementations.
pub mod waveform;

mod preview;

pub use controller::Controller;
pub use preview::preview;
pub use pulsegen_core as core;
