//! Event model and sound phase selection
//!
//! The event is the only state the pin-change side hands to the tick side.
//! The sound phase is never stored: it is recomputed every tick from the
//! event and the pass counter.

pub mod events;
pub mod phase;

pub use events::Event;
pub use phase::{select, Selection, SoundPhase};
