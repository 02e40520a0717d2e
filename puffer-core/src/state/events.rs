//! Coarse-grained input events

/// The single active event, overwritten by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Event {
    /// Nothing has happened since power-on
    #[default]
    None = 0,
    /// No sensor pulse during a whole check window while running
    SensorMissing = 1,
    /// Button 1 toggled the train on
    Button1Pressed = 2,
    /// Button 1 toggled the train off
    Button1Released = 3,
    /// Button 2 is held (whistle)
    Button2Pressed = 4,
    /// Button 2 let go
    Button2Released = 5,
}

impl Event {
    /// Decode a value stored in an atomic cell
    ///
    /// Unknown values decode as `None`.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Event::SensorMissing,
            2 => Event::Button1Pressed,
            3 => Event::Button1Released,
            4 => Event::Button2Pressed,
            5 => Event::Button2Released,
            _ => Event::None,
        }
    }

    /// The train is expected to be moving
    pub fn is_running(&self) -> bool {
        matches!(self, Event::Button1Pressed)
    }

    /// Motor must be cut immediately
    pub fn forces_stop(&self) -> bool {
        matches!(
            self,
            Event::Button2Pressed | Event::SensorMissing | Event::Button2Released
        )
    }

    /// A button is logically held, so the device must not go dormant
    pub fn keeps_awake(&self) -> bool {
        matches!(self, Event::Button1Pressed | Event::Button2Pressed)
    }
}
