//! Safety monitoring
//!
//! Fault detection that stops the train independently of the buttons.

pub mod sensor;

pub use sensor::{judge, FaultKind, SafetyStatus, SensorWatch};
