//! Track sensor watchdog
//!
//! While the train runs it must keep passing track markers. Pulses are
//! counted by the pin-change side; once per window the tick side drains
//! the count and a window without a single pulse means the train is
//! stuck or off the track.

use crate::state::Event;

/// Fault kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// No sensor pulse during a whole window while running
    SensorMissing,
}

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// All conditions normal
    Ok,
    /// Safety condition violated
    Fault(FaultKind),
}

/// Judge a closed window
pub fn judge(event: Event, pulses: u16) -> SafetyStatus {
    if event.is_running() && pulses == 0 {
        SafetyStatus::Fault(FaultKind::SensorMissing)
    } else {
        SafetyStatus::Ok
    }
}

/// Window timer for the sensor check
#[derive(Debug, Clone)]
pub struct SensorWatch {
    window_ticks: u16,
    elapsed: u16,
}

impl SensorWatch {
    pub fn new(window_ticks: u16) -> Self {
        Self {
            window_ticks,
            elapsed: 0,
        }
    }

    /// Start a fresh window
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    /// Advance one tick; true when the window closes on this tick
    ///
    /// The closing tick is not counted as part of the next window, so a
    /// window spans `window_ticks + 1` ticks.
    pub fn tick(&mut self) -> bool {
        if self.elapsed >= self.window_ticks {
            self.elapsed = 0;
            true
        } else {
            self.elapsed += 1;
            false
        }
    }
}
