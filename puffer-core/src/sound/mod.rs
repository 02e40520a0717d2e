//! Sample playback
//!
//! Fixed amplitude tables and the per-tick playback/envelope engine that
//! turns them into audio duty values.

pub mod player;
pub mod tables;

pub use player::{Player, PlayerStep};
pub use tables::{Clip, BELL_SAMPLES, ENGINE_SAMPLES, WHISTLE_SAMPLES};
