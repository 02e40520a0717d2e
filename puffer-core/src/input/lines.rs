//! Input line sampling
//!
//! All three lines are active low: a pressed button or a covered sensor
//! pulls the pin to ground against its pull-up.

use embedded_hal::digital::InputPin;

/// Snapshot of the three input lines, `true` = asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputLevels {
    pub button1: bool,
    pub button2: bool,
    pub sensor: bool,
}

/// The two buttons and the track sensor
pub struct InputLines<B1, B2, S> {
    pub button1: B1,
    pub button2: B2,
    pub sensor: S,
}

impl<B1, B2, S, E> InputLines<B1, B2, S>
where
    B1: InputPin<Error = E>,
    B2: InputPin<Error = E>,
    S: InputPin<Error = E>,
{
    pub fn new(button1: B1, button2: B2, sensor: S) -> Self {
        Self {
            button1,
            button2,
            sensor,
        }
    }

    /// Read all three lines
    pub fn levels(&mut self) -> Result<InputLevels, E> {
        Ok(InputLevels {
            button1: self.button1.is_low()?,
            button2: self.button2.is_low()?,
            sensor: self.sensor.is_low()?,
        })
    }
}
