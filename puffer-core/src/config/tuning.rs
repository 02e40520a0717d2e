//! Tuning constants for one toy
//!
//! All thresholds that drive the motor ramp and the sound schedule. Counts
//! are measured in completed sample table passes (`sound_count`), delays
//! and periods in ticks.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum scheduled interludes while running
pub const MAX_INTERLUDES: usize = 8;

/// Ring, whistle, ring while running at full schedule
const DEFAULT_INTERLUDES: [Interlude; 3] = [
    Interlude::ring(15, 20),
    Interlude::whistle(20, 25),
    Interlude::ring(25, 30),
];

const _: () = assert!(DEFAULT_INTERLUDES.len() <= MAX_INTERLUDES);

/// Kind of scheduled interlude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InterludeKind {
    /// Bell table looped for the window
    Ring,
    /// Whistle table looped for the window
    Whistle,
}

/// A bell or whistle window played while running
///
/// `start` and `stop` are offsets past the started threshold, so a window
/// covers the absolute counts `started + start .. started + stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interlude {
    pub kind: InterludeKind,
    pub start: u16,
    pub stop: u16,
}

impl Interlude {
    pub const fn ring(start: u16, stop: u16) -> Self {
        Self {
            kind: InterludeKind::Ring,
            start,
            stop,
        }
    }

    pub const fn whistle(start: u16, stop: u16) -> Self {
        Self {
            kind: InterludeKind::Whistle,
            start,
            stop,
        }
    }
}

/// Inter-sample delay curve for one engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DelayCurve {
    /// Longest pause between passes (ticks)
    pub max: u16,
    /// Shortest pause between passes (ticks)
    pub min: u16,
    /// Change per completed pass (ticks)
    pub inc: u16,
}

impl DelayCurve {
    /// Number of passes needed to walk from `max` to `min`
    pub const fn passes(&self) -> u16 {
        if self.inc == 0 || self.max <= self.min {
            0
        } else {
            (self.max - self.min) / self.inc
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A motor step period is zero
    ZeroRampPeriod,
    /// Start duty is zero or above the max duty
    StartDutyOutOfRange,
    /// Delay curve has max <= min or a zero increment
    InvalidDelayCurve,
    /// Interlude window is empty (start >= stop)
    EmptyInterlude,
    /// Interlude windows overlap or are out of order
    OverlappingInterludes,
    /// More interludes than fit in the schedule
    TooManyInterludes,
    /// Sensor window or tick rate is zero
    ZeroTiming,
}

/// Tuning constants
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /// Duty the motor jumps to when starting from rest
    pub motor_start_duty: u8,
    /// Full speed duty
    pub motor_max_duty: u8,
    /// Ticks per +1 duty step while starting
    pub motor_start_period: u16,
    /// Ticks per -1 duty step while stopping
    pub motor_stop_period: u16,
    /// Engine chug delays while accelerating
    pub starting: DelayCurve,
    /// Engine chug delays while decelerating
    pub stopping: DelayCurve,
    /// Bell/whistle windows, checked in order
    pub interludes: Vec<Interlude, MAX_INTERLUDES>,
    /// Ticks per sensor check window
    pub sensor_window_ticks: u16,
    /// Tick (audio sample) rate
    pub tick_rate_hz: u32,
    /// Button settle delay before re-reading
    pub settle_ms: u32,
    /// Quiet time before entering dormancy
    pub idle_grace_ms: u32,
    /// Poll interval while the train is active
    pub idle_poll_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            motor_start_duty: 0x80,
            motor_max_duty: 0xFF,
            motor_start_period: 300,
            motor_stop_period: 50,
            starting: DelayCurve {
                max: 3200,
                min: 200,
                inc: 500,
            },
            stopping: DelayCurve {
                max: 3200,
                min: 200,
                inc: 1000,
            },
            interludes: DEFAULT_INTERLUDES.into_iter().collect(),
            sensor_window_ticks: 8000,
            tick_rate_hz: 8000,
            settle_ms: 50,
            idle_grace_ms: 5000,
            idle_poll_ms: 1000,
        }
    }
}

impl Tuning {
    /// Passes after which the engine has finished starting
    pub fn started_count(&self) -> u16 {
        self.starting.passes()
    }

    /// Passes after which the stopping sound has finished
    pub fn stopped_count(&self) -> u16 {
        self.stopping.passes()
    }

    /// Delay before the next engine pass while starting
    pub fn starting_delay(&self, count: u16) -> u16 {
        self.starting
            .max
            .saturating_sub(count.saturating_mul(self.starting.inc))
    }

    /// Delay before the next engine pass at steady speed
    pub fn running_delay(&self) -> u16 {
        self.stopping.min
    }

    /// Delay before the next engine pass while stopping
    pub fn stopping_delay(&self, count: u16) -> u16 {
        self.stopping
            .min
            .saturating_add(count.saturating_mul(self.stopping.inc))
    }

    /// Interlude active at an absolute count, first match wins
    pub fn interlude_at(&self, count: u16) -> Option<InterludeKind> {
        let base = self.started_count();
        self.interludes
            .iter()
            .find(|w| {
                count >= base.saturating_add(w.start) && count < base.saturating_add(w.stop)
            })
            .map(|w| w.kind)
    }

    /// True if `count` is the first pass of some interlude
    pub fn starts_interlude(&self, count: u16) -> bool {
        let base = self.started_count();
        self.interludes.iter().any(|w| count == base.saturating_add(w.start))
    }

    /// True if `count` is the pass right after some interlude
    pub fn ends_interlude(&self, count: u16) -> bool {
        let base = self.started_count();
        self.interludes.iter().any(|w| count == base.saturating_add(w.stop))
    }

    /// Absolute count at which the interlude schedule repeats
    pub fn schedule_end(&self) -> Option<u16> {
        let base = self.started_count();
        self.interludes.iter().map(|w| base.saturating_add(w.stop)).max()
    }

    /// Tick period in microseconds
    pub fn tick_period_us(&self) -> u64 {
        1_000_000 / self.tick_rate_hz.max(1) as u64
    }

    /// Check all constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.motor_start_period == 0 || self.motor_stop_period == 0 {
            return Err(ConfigError::ZeroRampPeriod);
        }

        if self.motor_start_duty == 0 || self.motor_start_duty > self.motor_max_duty {
            return Err(ConfigError::StartDutyOutOfRange);
        }

        for curve in [&self.starting, &self.stopping] {
            if curve.inc == 0 || curve.max <= curve.min || curve.passes() == 0 {
                return Err(ConfigError::InvalidDelayCurve);
            }
        }

        let mut prev_stop: Option<u16> = None;
        for window in &self.interludes {
            if window.start >= window.stop {
                return Err(ConfigError::EmptyInterlude);
            }
            if let Some(stop) = prev_stop {
                if window.start < stop {
                    return Err(ConfigError::OverlappingInterludes);
                }
            }
            prev_stop = Some(window.stop);
        }

        if self.sensor_window_ticks == 0 || self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTiming);
        }

        Ok(())
    }

    /// Replace the interlude schedule
    pub fn set_interludes(&mut self, windows: &[Interlude]) -> Result<(), ConfigError> {
        self.interludes =
            Vec::from_slice(windows).map_err(|_| ConfigError::TooManyInterludes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_derived_thresholds() {
        let t = Tuning::default();
        assert_eq!(t.started_count(), 6);
        assert_eq!(t.stopped_count(), 3);
        assert_eq!(t.schedule_end(), Some(36));
    }

    #[test]
    fn test_delays() {
        let t = Tuning::default();
        assert_eq!(t.starting_delay(0), 3200);
        assert_eq!(t.starting_delay(5), 700);
        assert_eq!(t.running_delay(), 200);
        assert_eq!(t.stopping_delay(0), 200);
        assert_eq!(t.stopping_delay(2), 2200);
    }

    #[test]
    fn test_interlude_lookup() {
        let t = Tuning::default();
        assert_eq!(t.interlude_at(20), None);
        assert_eq!(t.interlude_at(21), Some(InterludeKind::Ring));
        assert_eq!(t.interlude_at(25), Some(InterludeKind::Ring));
        assert_eq!(t.interlude_at(26), Some(InterludeKind::Whistle));
        assert_eq!(t.interlude_at(31), Some(InterludeKind::Ring));
        assert_eq!(t.interlude_at(36), None);

        assert!(t.starts_interlude(21));
        assert!(t.starts_interlude(26));
        assert!(!t.starts_interlude(22));
        assert!(t.ends_interlude(36));
        assert!(!t.ends_interlude(21));
    }

    #[test]
    fn test_tick_period() {
        assert_eq!(Tuning::default().tick_period_us(), 125);
    }

    #[test]
    fn test_rejects_bad_ramp() {
        let mut t = Tuning::default();
        t.motor_stop_period = 0;
        assert_eq!(t.validate(), Err(ConfigError::ZeroRampPeriod));

        let mut t = Tuning::default();
        t.motor_start_duty = 0;
        assert_eq!(t.validate(), Err(ConfigError::StartDutyOutOfRange));
    }

    #[test]
    fn test_rejects_bad_curve() {
        let mut t = Tuning::default();
        t.starting.inc = 0;
        assert_eq!(t.validate(), Err(ConfigError::InvalidDelayCurve));

        let mut t = Tuning::default();
        t.stopping.min = t.stopping.max;
        assert_eq!(t.validate(), Err(ConfigError::InvalidDelayCurve));
    }

    #[test]
    fn test_rejects_bad_interludes() {
        let mut t = Tuning::default();
        t.set_interludes(&[Interlude::ring(5, 5)]).unwrap();
        assert_eq!(t.validate(), Err(ConfigError::EmptyInterlude));

        let mut t = Tuning::default();
        t.set_interludes(&[Interlude::ring(5, 10), Interlude::whistle(8, 12)])
            .unwrap();
        assert_eq!(t.validate(), Err(ConfigError::OverlappingInterludes));

        let mut t = Tuning::default();
        assert_eq!(
            t.set_interludes(&[Interlude::ring(0, 1); MAX_INTERLUDES + 1]),
            Err(ConfigError::TooManyInterludes)
        );
    }

    #[test]
    fn test_empty_schedule_never_rewinds() {
        let mut t = Tuning::default();
        t.set_interludes(&[]).unwrap();
        assert_eq!(t.validate(), Ok(()));
        assert_eq!(t.schedule_end(), None);
        assert_eq!(t.interlude_at(21), None);
    }
}
