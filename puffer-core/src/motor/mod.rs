//! Motor speed control
//!
//! The motor never jumps to a new speed: it walks one duty step at a time
//! toward full speed or toward rest.

pub mod ramp;

pub use ramp::MotorRamp;
