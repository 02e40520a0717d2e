//! Playback/envelope engine
//!
//! Advances one table entry per tick once the inter-pass delay has run
//! out. The first and last entries of a table are special: their byte
//! value `B` is both the amplitude to reach and the number of ticks the
//! fade takes. A fade-in writes `1, 2, ..., B` before moving to entry 1;
//! a fade-out writes `B-1, ..., 0` before leaving the table.
//!
//! Engine phases fade on every pass. Bell and whistle loops fade only on
//! the first pass of an interlude window (in) and on the pass where the
//! window has just ended (out), so back-to-back loops stay seamless.

use crate::config::Tuning;
use crate::state::SoundPhase;

/// Output of one playback tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerStep {
    /// Audio duty for this tick
    pub amplitude: u8,
    /// A table pass finished this tick (the caller bumps the pass count)
    pub pass_completed: bool,
}

/// Playback cursor and envelope state
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Next table entry to play; equals the table length once a pass is done
    index: u16,
    /// Ticks left before the next pass starts
    delay: u16,
    /// Ticks spent in the current boundary fade
    ramp: u8,
    /// Last amplitude written
    amplitude: u8,
}

impl Player {
    pub const fn new() -> Self {
        Self {
            index: 0,
            delay: 0,
            ramp: 0,
            amplitude: 0,
        }
    }

    /// Restart at the top of the table with no pending delay
    ///
    /// Leaves the fade counter and the held amplitude alone.
    pub fn rewind(&mut self) {
        self.index = 0;
        self.delay = 0;
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn delay(&self) -> u16 {
        self.delay
    }

    pub fn amplitude(&self) -> u8 {
        self.amplitude
    }

    /// Run one tick for the given phase and pass count
    pub fn tick(&mut self, phase: SoundPhase, count: u16, tuning: &Tuning) -> PlayerStep {
        if self.delay > 0 {
            self.delay -= 1;
            return self.hold();
        }

        let samples = phase.samples();
        if (self.index as usize) < samples.len() {
            let fades = phase.fades_every_pass();
            let fade_in = fades || tuning.starts_interlude(count);
            let fade_out = fades || tuning.ends_interlude(count);
            self.play_sample(samples, fade_in, fade_out);
            return self.hold();
        }

        // Past the end of the table: schedule the next pass
        self.delay = match phase {
            SoundPhase::None => {
                self.amplitude = 0;
                0
            }
            SoundPhase::Starting => tuning.starting_delay(count),
            SoundPhase::Running => tuning.running_delay(),
            SoundPhase::Stopping => tuning.stopping_delay(count),
            SoundPhase::Ringing | SoundPhase::Whistling => 0,
        };
        self.index = 0;

        PlayerStep {
            amplitude: self.amplitude,
            pass_completed: phase != SoundPhase::None,
        }
    }

    /// Play the entry under the cursor, applying boundary fades
    ///
    /// `self.index` must be below `samples.len()`.
    fn play_sample(&mut self, samples: &[u8], fade_in: bool, fade_out: bool) {
        let index = self.index as usize;
        let byte = samples[index];

        if index == 0 && self.ramp < byte && fade_in {
            self.ramp += 1;
            self.amplitude = self.ramp;
            self.finish_ramp(byte);
        } else if index == samples.len() - 1 && self.ramp < byte && fade_out {
            self.ramp += 1;
            self.amplitude = byte - self.ramp;
            self.finish_ramp(byte);
        } else {
            self.amplitude = byte;
            self.index += 1;
        }
    }

    fn finish_ramp(&mut self, byte: u8) {
        if self.ramp == byte {
            self.ramp = 0;
            self.index += 1;
        }
    }

    fn hold(&self) -> PlayerStep {
        PlayerStep {
            amplitude: self.amplitude,
            pass_completed: false,
        }
    }
}
