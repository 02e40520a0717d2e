//! Tick scheduling
//!
//! Everything that runs once per audio-rate tick, in a fixed order.

pub mod engine;

pub use engine::TickEngine;
