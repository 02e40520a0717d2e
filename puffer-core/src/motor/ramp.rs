//! Motor duty ramp
//!
//! Called once per tick with the current event. Starting from rest the
//! duty jumps to a fixed start value (below it the motor stalls), then
//! climbs by one every `motor_start_period` ticks. Stopping drops by one
//! every `motor_stop_period` ticks, which is shorter, so the train stops
//! faster than it starts. Whistle and fault events cut the motor at once.
//!
//! # Usage
//!
//! ```
//! use puffer_core::config::Tuning;
//! use puffer_core::motor::MotorRamp;
//! use puffer_core::state::Event;
//!
//! let tuning = Tuning::default();
//! let mut ramp = MotorRamp::new();
//! assert_eq!(ramp.tick(Event::Button1Pressed, &tuning), 0x80);
//! ```

use crate::config::Tuning;
use crate::state::Event;

/// Motor duty ramp state
#[derive(Debug, Clone, Default)]
pub struct MotorRamp {
    /// Current motor duty (0 = stopped)
    duty: u8,
    /// Ticks since the last duty step
    delay: u16,
}

impl MotorRamp {
    pub const fn new() -> Self {
        Self { duty: 0, delay: 0 }
    }

    /// Current duty
    pub fn duty(&self) -> u8 {
        self.duty
    }

    /// Restart the step period without touching the duty
    pub fn reset_period(&mut self) {
        self.delay = 0;
    }

    /// Advance one tick and return the duty to output
    pub fn tick(&mut self, event: Event, tuning: &Tuning) -> u8 {
        match event {
            Event::Button1Pressed => {
                if self.duty < tuning.motor_max_duty {
                    if self.duty == 0 {
                        // Full start period before the first climb
                        self.duty = tuning.motor_start_duty;
                        self.delay = 0;
                    }
                    self.step(tuning.motor_start_period, 1);
                }
            }
            Event::Button1Released => {
                if self.duty > 0 {
                    self.step(tuning.motor_stop_period, -1);
                }
            }
            Event::Button2Pressed | Event::SensorMissing | Event::Button2Released => {
                self.duty = 0;
            }
            Event::None => {}
        }

        self.duty
    }

    fn step(&mut self, period: u16, direction: i8) {
        self.delay = self.delay.saturating_add(1);
        if self.delay >= period {
            self.duty = if direction > 0 {
                self.duty.saturating_add(1)
            } else {
                self.duty.saturating_sub(1)
            };
            self.delay = 0;
        }
    }
}
