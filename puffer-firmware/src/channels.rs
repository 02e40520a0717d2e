//! Shared state between Embassy tasks
//!
//! The tick task and the input task talk through [`ControlLink`] atomics
//! rather than channels: the tick must never block on a queue. The two
//! signals only carry wake-ups out of dormancy.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

use puffer_core::link::ControlLink;

/// Event, reset requests, sensor pulses and tick-side snapshots
pub static LINK: ControlLink = ControlLink::new();

/// Set by the power loop when the train has been idle long enough
pub static DORMANT: AtomicBool = AtomicBool::new(false);

/// Resumes the parked tick task
pub static TICK_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Resumes the sleeping power loop
pub static POWER_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Leave dormancy after an input edge
///
/// Only signals when dormant so a stale wake-up never short-cuts the next
/// sleep.
pub fn wake() -> bool {
    if DORMANT.swap(false, Ordering::AcqRel) {
        TICK_WAKE.signal(());
        POWER_WAKE.signal(());
        true
    } else {
        false
    }
}
