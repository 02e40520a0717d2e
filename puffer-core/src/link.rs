//! Shared state between the pin-change and tick contexts
//!
//! One `static` instance is shared by exactly two writers with disjoint
//! fields:
//!
//! - The debounce side publishes the event, counts sensor pulses and posts
//!   counter reset requests.
//! - The tick side owns every counter. It drains reset requests at the
//!   start of each tick and publishes read-only snapshots of the pass
//!   count and motor duty that the debouncer consults.
//!
//! The tick side only ever writes the event through a compare-and-swap
//! from `Button1Pressed` to `SensorMissing`, so it cannot clobber a fresh
//! button event.

use portable_atomic::{AtomicU16, AtomicU8, Ordering};

use crate::state::Event;

/// Counter reset requested by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetRequest(u8);

impl ResetRequest {
    pub const NONE: Self = Self(0);
    /// Restart the pass counter only (whistle trigger)
    pub const SOUND_COUNT: Self = Self(0b01);
    /// Restart a whole start/stop cycle: pass counter, motor step period,
    /// playback cursor and sensor window
    pub const CYCLE: Self = Self(0b11);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Lock-free control state shared by both interrupt contexts
pub struct ControlLink {
    event: AtomicU8,
    resets: AtomicU8,
    sensor_pulses: AtomicU16,
    sound_count: AtomicU16,
    motor_duty: AtomicU8,
}

impl Default for ControlLink {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlLink {
    /// Power-on state: no event, all counters zero
    pub const fn new() -> Self {
        Self {
            event: AtomicU8::new(Event::None as u8),
            resets: AtomicU8::new(0),
            sensor_pulses: AtomicU16::new(0),
            sound_count: AtomicU16::new(0),
            motor_duty: AtomicU8::new(0),
        }
    }

    /// Current event
    pub fn event(&self) -> Event {
        Event::from_u8(self.event.load(Ordering::Acquire))
    }

    /// Pass count as of the last tick
    pub fn sound_count(&self) -> u16 {
        self.sound_count.load(Ordering::Relaxed)
    }

    /// Motor duty as of the last tick
    pub fn motor_duty(&self) -> u8 {
        self.motor_duty.load(Ordering::Relaxed)
    }

    /// Sensor pulses counted in the open window
    pub fn sensor_pulses(&self) -> u16 {
        self.sensor_pulses.load(Ordering::Relaxed)
    }

    // Debounce side

    pub(crate) fn publish_event(&self, event: Event) {
        self.event.store(event as u8, Ordering::Release);
    }

    pub(crate) fn request_reset(&self, request: ResetRequest) {
        self.resets.fetch_or(request.0, Ordering::AcqRel);
    }

    pub(crate) fn count_sensor_pulse(&self) {
        let _ = self
            .sensor_pulses
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some(n.saturating_add(1))
            });
    }

    // Tick side

    pub(crate) fn take_resets(&self) -> ResetRequest {
        ResetRequest(self.resets.swap(0, Ordering::AcqRel))
    }

    pub(crate) fn take_sensor_pulses(&self) -> u16 {
        self.sensor_pulses.swap(0, Ordering::Relaxed)
    }

    /// Switch `Button1Pressed` to `SensorMissing`; false if the event moved on
    pub(crate) fn flag_sensor_missing(&self) -> bool {
        self.event
            .compare_exchange(
                Event::Button1Pressed as u8,
                Event::SensorMissing as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub(crate) fn report(&self, sound_count: u16, motor_duty: u8) {
        self.sound_count.store(sound_count, Ordering::Relaxed);
        self.motor_duty.store(motor_duty, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let link = ControlLink::new();
        assert_eq!(link.event(), Event::None);
        assert_eq!(link.sound_count(), 0);
        assert_eq!(link.motor_duty(), 0);
        assert!(link.take_resets().is_empty());
    }

    #[test]
    fn test_resets_merge_and_drain() {
        let link = ControlLink::new();
        link.request_reset(ResetRequest::SOUND_COUNT);
        link.request_reset(ResetRequest::CYCLE);

        let taken = link.take_resets();
        assert!(taken.contains(ResetRequest::CYCLE));
        assert!(taken.contains(ResetRequest::SOUND_COUNT));
        assert!(link.take_resets().is_empty());
    }

    #[test]
    fn test_sound_count_request_is_not_a_cycle() {
        assert!(ResetRequest::SOUND_COUNT.contains(ResetRequest::SOUND_COUNT));
        assert!(!ResetRequest::SOUND_COUNT.contains(ResetRequest::CYCLE));
        assert!(!ResetRequest::NONE.contains(ResetRequest::NONE));
    }

    #[test]
    fn test_sensor_pulses_drain() {
        let link = ControlLink::new();
        link.count_sensor_pulse();
        link.count_sensor_pulse();
        assert_eq!(link.take_sensor_pulses(), 2);
        assert_eq!(link.sensor_pulses(), 0);
    }

    #[test]
    fn test_sensor_missing_only_replaces_running() {
        let link = ControlLink::new();
        link.publish_event(Event::Button1Pressed);
        assert!(link.flag_sensor_missing());
        assert_eq!(link.event(), Event::SensorMissing);

        link.publish_event(Event::Button2Pressed);
        assert!(!link.flag_sensor_missing());
        assert_eq!(link.event(), Event::Button2Pressed);
    }
}
