//! ddelay-core - a multi-channel feedback delay line.
//!
//! This crate is the DSP core of the ddelay effect: one circular sample
//! buffer per audio channel, a feedback write-back path, and a delay time
//! that can be retuned every sample, either as a musical note division at
//! a tempo or as a free-running duration.
//!
//! # Core Abstractions
//!
//! - [`FeedbackDelay`] - the effect itself: per-channel delay buffers,
//!   feedback, runtime reconfiguration via [`FeedbackDelay::reinit`]
//! - [`DelayLine`] - single-channel circular buffer with fractional reads
//! - [`DelayParams`] - the three live parameters (feedback, time selector,
//!   time mode), read fresh on every processed sample
//! - [`NoteDivision`] - musical subdivisions for tempo-synced delay times
//!
//! # Mix Policy
//!
//! [`FeedbackDelay::process_sample`] returns the *wet* signal only; the
//! caller adds it onto the dry sample (`out = dry + wet`). There is no
//! dry/wet crossfade parameter. [`FeedbackDelay::process_in_place`] applies
//! that additive mix for whole blocks.
//!
//! # Real-Time Safety
//!
//! All allocation happens in [`FeedbackDelay::reinit`], which runs on a
//! control thread. The per-sample path never allocates, locks, or panics
//! in release builds; out-of-domain inputs are clamped and counted in a
//! diagnostics counter readable out-of-band.
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! ddelay-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ddelay_core::{DelayParams, FeedbackDelay, TimeMode, TimeSelector};
//!
//! let mut delay = FeedbackDelay::new(2, 48000.0).unwrap();
//! let params = DelayParams {
//!     feedback: 0.5,
//!     time: TimeSelector::new(4),
//!     mode: TimeMode::Synced { bpm: 140.0 },
//! };
//!
//! // Audio callback: one sample per channel, wet added onto dry.
//! let dry = 0.25;
//! let wet = delay.process_sample(0, dry, &params);
//! let out = dry + wet;
//! # let _ = out;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay;
pub mod error;
pub mod line;
pub mod math;
pub mod params;
pub mod tempo;

pub use delay::{FeedbackDelay, MAX_DELAY_SECS};
pub use error::ConfigError;
pub use line::DelayLine;
pub use math::{db_to_linear, flush_denormal, linear_to_db};
pub use params::{
    DelayParams, FREE_STEP_SECS, ParamDescriptor, ParamUnit, TimeMode, TimeSelector,
    param_descriptors,
};
pub use tempo::{DEFAULT_TEMPO_BPM, NoteDivision};
