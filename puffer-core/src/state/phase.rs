//! Sound phase selection
//!
//! A pure function of (event, pass count). Calling it twice with the same
//! inputs gives the same phase, so counter resets can never leave a stale
//! phase behind.

use super::events::Event;
use crate::config::{InterludeKind, Tuning};
use crate::sound::Clip;

/// Currently selected sound behaviour
///
/// Variant order matters: everything up to and including `Stopping` fades
/// at every table boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundPhase {
    #[default]
    None,
    Starting,
    Running,
    Stopping,
    Ringing,
    Whistling,
}

impl SoundPhase {
    /// Table played in this phase, if any
    pub fn clip(&self) -> Option<Clip> {
        match self {
            SoundPhase::None => None,
            SoundPhase::Starting | SoundPhase::Running | SoundPhase::Stopping => {
                Some(Clip::Engine)
            }
            SoundPhase::Ringing => Some(Clip::Bell),
            SoundPhase::Whistling => Some(Clip::Whistle),
        }
    }

    /// Samples of the selected table (empty when silent)
    pub fn samples(&self) -> &'static [u8] {
        match self.clip() {
            Some(clip) => clip.samples(),
            None => &[],
        }
    }

    /// Engine-or-silent phases fade in and out on every pass
    pub fn fades_every_pass(&self) -> bool {
        *self <= SoundPhase::Stopping
    }
}

/// Result of one selection step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    /// Phase for this tick
    pub phase: SoundPhase,
    /// New pass count when the interlude schedule wraps around
    pub rewind: Option<u16>,
}

impl Selection {
    const fn phase(phase: SoundPhase) -> Self {
        Self {
            phase,
            rewind: None,
        }
    }
}

/// Select the sound phase for this tick
pub fn select(event: Event, count: u16, tuning: &Tuning) -> Selection {
    match event {
        Event::Button1Pressed => {
            if let Some(kind) = tuning.interlude_at(count) {
                return Selection::phase(match kind {
                    InterludeKind::Ring => SoundPhase::Ringing,
                    InterludeKind::Whistle => SoundPhase::Whistling,
                });
            }

            let phase = if count < tuning.started_count() {
                SoundPhase::Starting
            } else {
                SoundPhase::Running
            };

            // Rewind lands on the running baseline; the caller applies it
            // before playback, so this tick already plays the rewound count.
            let rewind = match tuning.schedule_end() {
                Some(end) if count == end => Some(tuning.started_count()),
                _ => None,
            };

            Selection { phase, rewind }
        }
        Event::Button1Released => {
            if count < tuning.stopped_count() {
                Selection::phase(SoundPhase::Stopping)
            } else {
                Selection::phase(SoundPhase::None)
            }
        }
        Event::Button2Pressed => Selection::phase(SoundPhase::Whistling),
        Event::SensorMissing | Event::Button2Released | Event::None => {
            Selection::phase(SoundPhase::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase_at(event: Event, count: u16) -> SoundPhase {
        select(event, count, &Tuning::default()).phase
    }

    #[test]
    fn test_starting_then_running() {
        for count in 0..6 {
            assert_eq!(phase_at(Event::Button1Pressed, count), SoundPhase::Starting);
        }
        for count in 6..21 {
            assert_eq!(phase_at(Event::Button1Pressed, count), SoundPhase::Running);
        }
    }

    #[test]
    fn test_interlude_windows() {
        for count in 21..26 {
            assert_eq!(phase_at(Event::Button1Pressed, count), SoundPhase::Ringing);
        }
        for count in 26..31 {
            assert_eq!(phase_at(Event::Button1Pressed, count), SoundPhase::Whistling);
        }
        for count in 31..36 {
            assert_eq!(phase_at(Event::Button1Pressed, count), SoundPhase::Ringing);
        }
        assert_eq!(phase_at(Event::Button1Pressed, 36), SoundPhase::Running);
    }

    #[test]
    fn test_rewind_at_schedule_end() {
        let tuning = Tuning::default();
        let selection = select(Event::Button1Pressed, 36, &tuning);
        assert_eq!(selection.phase, SoundPhase::Running);
        assert_eq!(selection.rewind, Some(6));

        assert_eq!(select(Event::Button1Pressed, 35, &tuning).rewind, None);
        assert_eq!(select(Event::Button1Pressed, 20, &tuning).rewind, None);
    }

    #[test]
    fn test_stopping() {
        for count in 0..3 {
            assert_eq!(phase_at(Event::Button1Released, count), SoundPhase::Stopping);
        }
        assert_eq!(phase_at(Event::Button1Released, 3), SoundPhase::None);
        assert_eq!(phase_at(Event::Button1Released, 40), SoundPhase::None);
    }

    #[test]
    fn test_whistle_and_silence() {
        assert_eq!(phase_at(Event::Button2Pressed, 0), SoundPhase::Whistling);
        assert_eq!(phase_at(Event::Button2Pressed, 500), SoundPhase::Whistling);
        assert_eq!(phase_at(Event::Button2Released, 0), SoundPhase::None);
        assert_eq!(phase_at(Event::SensorMissing, 10), SoundPhase::None);
        assert_eq!(phase_at(Event::None, 0), SoundPhase::None);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let tuning = Tuning::default();
        for count in 0..40 {
            let a = select(Event::Button1Pressed, count, &tuning);
            let b = select(Event::Button1Pressed, count, &tuning);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_phase_clips() {
        assert_eq!(SoundPhase::None.clip(), None);
        assert!(SoundPhase::None.samples().is_empty());
        assert_eq!(SoundPhase::Stopping.clip(), Some(Clip::Engine));
        assert_eq!(SoundPhase::Ringing.clip(), Some(Clip::Bell));
        assert_eq!(SoundPhase::Whistling.clip(), Some(Clip::Whistle));
    }

    #[test]
    fn test_fade_class() {
        assert!(SoundPhase::None.fades_every_pass());
        assert!(SoundPhase::Starting.fades_every_pass());
        assert!(SoundPhase::Running.fades_every_pass());
        assert!(SoundPhase::Stopping.fades_every_pass());
        assert!(!SoundPhase::Ringing.fades_every_pass());
        assert!(!SoundPhase::Whistling.fades_every_pass());
    }
}
