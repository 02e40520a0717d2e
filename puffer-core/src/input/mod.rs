//! Button and track sensor input
//!
//! Raw line levels are turned into the coarse [`Event`](crate::state::Event)
//! consumed by the tick engine.

pub mod debounce;
pub mod lines;

pub use debounce::{Button, Debouncer, EdgeAction, SensorPower};
pub use lines::{InputLevels, InputLines};
