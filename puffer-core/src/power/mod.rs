//! Idle power policy
//!
//! Decides when the device may go dormant. It only reads the event and
//! never touches control state.

pub mod idle;

pub use idle::{IdleAction, IdleMonitor};
