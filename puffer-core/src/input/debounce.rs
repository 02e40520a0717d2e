//! Two-phase button debounce
//!
//! A pin edge is first classified by [`Debouncer::on_edge`]. Button edges
//! ask the caller to wait out the settle delay (without blocking) and then
//! re-read the lines for [`Debouncer::confirm`]. A bounce that resolves
//! before the re-read is simply dropped; there is no counter-based filter.
//!
//! Button 1 toggles the train: the first press starts it, the next press
//! stops it once the starting sound has progressed far enough. Button 2
//! whistles while held.

use super::lines::InputLevels;
use crate::config::Tuning;
use crate::link::{ControlLink, ResetRequest};
use crate::state::Event;

/// Debounced buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    One,
    Two,
}

/// What the caller must do after an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeAction {
    /// Wait the settle delay, re-read, then call `confirm`
    Settle(Button),
    /// Button 2 was let go; the event is already published
    Released,
    /// Nothing to do
    Ignored,
}

/// Sensor line power state change
///
/// The sensor pull-up and edge interrupt only stay on while the train is
/// expected to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorPower {
    Enable,
    Disable,
}

/// Pin-change side of the control link
pub struct Debouncer<'a> {
    link: &'a ControlLink,
    stopped_count: u16,
}

impl<'a> Debouncer<'a> {
    pub fn new(link: &'a ControlLink, tuning: &Tuning) -> Self {
        Self {
            link,
            stopped_count: tuning.stopped_count(),
        }
    }

    /// Classify an edge on any input line
    pub fn on_edge(&mut self, levels: InputLevels) -> EdgeAction {
        if levels.sensor {
            self.link.count_sensor_pulse();
        }

        if levels.button1 {
            EdgeAction::Settle(Button::One)
        } else if levels.button2 {
            EdgeAction::Settle(Button::Two)
        } else if self.link.event() == Event::Button2Pressed {
            self.link.publish_event(Event::Button2Released);
            EdgeAction::Released
        } else {
            EdgeAction::Ignored
        }
    }

    /// Publish a whistle release the caller may have missed
    ///
    /// For callers that only see edges while actively waiting: a release
    /// between the post-settle re-read and re-arming leaves no edge behind.
    /// Unlike [`Debouncer::on_edge`] this never asks to settle a held button
    /// and never counts a sensor pulse.
    pub fn sync_release(&mut self, levels: InputLevels) -> EdgeAction {
        if !levels.button2 && self.link.event() == Event::Button2Pressed {
            self.link.publish_event(Event::Button2Released);
            EdgeAction::Released
        } else {
            EdgeAction::Ignored
        }
    }

    /// Re-check a button after the settle delay
    ///
    /// Returns a sensor power change when the train starts or stops.
    pub fn confirm(&mut self, button: Button, levels: InputLevels) -> Option<SensorPower> {
        match button {
            Button::One if levels.button1 => self.toggle_train(),
            Button::Two if levels.button2 => {
                self.link.request_reset(ResetRequest::SOUND_COUNT);
                self.link.publish_event(Event::Button2Pressed);
                None
            }
            // Bounce: released again before the re-read
            _ => None,
        }
    }

    fn toggle_train(&mut self) -> Option<SensorPower> {
        if self.link.event() != Event::Button1Pressed {
            // A coasting train is not restarted
            if self.link.motor_duty() != 0 {
                return None;
            }
            self.link.request_reset(ResetRequest::CYCLE);
            self.link.publish_event(Event::Button1Pressed);
            Some(SensorPower::Enable)
        } else {
            // Let the starting sound get going before accepting a stop
            if self.link.sound_count() < self.stopped_count {
                return None;
            }
            self.link.request_reset(ResetRequest::CYCLE);
            self.link.publish_event(Event::Button1Released);
            Some(SensorPower::Disable)
        }
    }
}
