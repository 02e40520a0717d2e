//! Idle monitor
//!
//! While a button is logically held the monitor re-checks on a coarse
//! interval. Once nothing is held it waits a grace period (long enough for
//! the stopping sound and motor ramp to finish) and, if still quiet, asks
//! for sleep. The caller resumes polling after it has been woken by an
//! input edge.

use crate::config::Tuning;
use crate::state::Event;

/// Next step for the power loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdleAction {
    /// Poll again after this many milliseconds
    Wait(u32),
    /// Enter the low-power wait until an input edge
    Sleep,
}

/// Two-step idle detector
#[derive(Debug, Clone)]
pub struct IdleMonitor {
    grace_ms: u32,
    poll_ms: u32,
    in_grace: bool,
}

impl IdleMonitor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            grace_ms: tuning.idle_grace_ms,
            poll_ms: tuning.idle_poll_ms,
            in_grace: false,
        }
    }

    /// Decide what to do given the current event
    pub fn poll(&mut self, event: Event) -> IdleAction {
        if event.keeps_awake() {
            self.in_grace = false;
            return IdleAction::Wait(self.poll_ms);
        }

        if self.in_grace {
            self.in_grace = false;
            IdleAction::Sleep
        } else {
            self.in_grace = true;
            IdleAction::Wait(self.grace_ms)
        }
    }
}
