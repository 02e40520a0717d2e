//! Board-agnostic core logic for the toy train controller
//!
//! This crate contains everything that runs inside the two interrupt
//! contexts, without touching hardware registers:
//!
//! - Debounced event model fed by the pin-change handler
//! - Motor duty ramp
//! - Sound phase selection and the sample playback/envelope engine
//! - Sensor watchdog and idle policy
//! - Tuning constants and their validation
//!
//! The firmware owns a `static` [`link::ControlLink`], hands a
//! [`input::Debouncer`] to its pin-change task and a
//! [`scheduler::TickEngine`] to its tick task.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod link;
pub mod motor;
pub mod output;
pub mod power;
pub mod safety;
pub mod scheduler;
pub mod sound;
pub mod state;
