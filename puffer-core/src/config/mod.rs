//! Configuration types
//!
//! Hand-tuned constants for the motor ramp, the sound schedule and the
//! input/power timing. The firmware bakes a validated copy in at build time.

pub mod tuning;

pub use tuning::*;
