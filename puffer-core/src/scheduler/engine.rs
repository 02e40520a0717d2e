//! Per-tick control engine
//!
//! One call to [`TickEngine::tick`] per sample period, never re-entered:
//!
//! 1. Apply counter resets posted by the debouncer
//! 2. Step the sensor window, flagging `SensorMissing` when it closes empty
//! 3. Motor ramp
//! 4. Sound phase selection (may rewind the pass count)
//! 5. Sample playback
//! 6. Publish snapshots for the debouncer
//!
//! Both duty values are produced on every tick, including while the
//! player waits out an inter-pass delay.

use crate::config::Tuning;
use crate::link::{ControlLink, ResetRequest};
use crate::motor::MotorRamp;
use crate::output::{DutyFrame, DutySink};
use crate::safety::{judge, SafetyStatus, SensorWatch};
use crate::sound::Player;
use crate::state::{select, Event, SoundPhase};

/// Tick side of the control link
pub struct TickEngine<'a> {
    link: &'a ControlLink,
    tuning: &'a Tuning,
    ramp: MotorRamp,
    player: Player,
    watch: SensorWatch,
    /// Completed table passes since the last reset
    sound_count: u16,
    /// Phase selected on the last tick (for observers only)
    phase: SoundPhase,
}

impl<'a> TickEngine<'a> {
    pub fn new(link: &'a ControlLink, tuning: &'a Tuning) -> Self {
        Self {
            link,
            tuning,
            ramp: MotorRamp::new(),
            player: Player::new(),
            watch: SensorWatch::new(tuning.sensor_window_ticks),
            sound_count: 0,
            phase: SoundPhase::None,
        }
    }

    /// Phase selected on the last tick
    pub fn phase(&self) -> SoundPhase {
        self.phase
    }

    /// Completed table passes since the last reset
    pub fn sound_count(&self) -> u16 {
        self.sound_count
    }

    pub fn motor_duty(&self) -> u8 {
        self.ramp.duty()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Run one tick and return the duty values to output
    pub fn tick(&mut self) -> DutyFrame {
        self.apply_resets();

        if self.watch.tick() {
            let pulses = self.link.take_sensor_pulses();
            if let SafetyStatus::Fault(_) = judge(self.link.event(), pulses) {
                self.link.flag_sensor_missing();
            }
        }

        let event: Event = self.link.event();
        let motor = self.ramp.tick(event, self.tuning);

        let selection = select(event, self.sound_count, self.tuning);
        if let Some(count) = selection.rewind {
            self.sound_count = count;
        }
        self.phase = selection.phase;

        let step = self.player.tick(selection.phase, self.sound_count, self.tuning);
        if step.pass_completed {
            self.sound_count = self.sound_count.saturating_add(1);
        }

        self.link.report(self.sound_count, motor);

        DutyFrame {
            motor,
            audio: step.amplitude,
        }
    }

    /// Run one tick and write it to a sink
    pub fn tick_into<S: DutySink>(&mut self, sink: &mut S) -> Result<DutyFrame, S::Error> {
        let frame = self.tick();
        sink.write(frame)?;
        Ok(frame)
    }

    fn apply_resets(&mut self) {
        let resets = self.link.take_resets();
        if resets.contains(ResetRequest::SOUND_COUNT) {
            self.sound_count = 0;
        }
        if resets.contains(ResetRequest::CYCLE) {
            self.ramp.reset_period();
            self.player.rewind();
            self.watch.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Button, Debouncer, EdgeAction, InputLevels};
    use crate::state::Event;
    use proptest::prelude::*;

    const BUTTON1: InputLevels = InputLevels {
        button1: true,
        button2: false,
        sensor: false,
    };
    const BUTTON2: InputLevels = InputLevels {
        button1: false,
        button2: true,
        sensor: false,
    };
    const SENSOR: InputLevels = InputLevels {
        button1: false,
        button2: false,
        sensor: true,
    };
    const IDLE: InputLevels = InputLevels {
        button1: false,
        button2: false,
        sensor: false,
    };

    fn press(debouncer: &mut Debouncer, levels: InputLevels) {
        if let EdgeAction::Settle(button) = debouncer.on_edge(levels) {
            debouncer.confirm(button, levels);
        }
    }

    /// Tick with a sensor pulse every 1000 ticks
    fn run(engine: &mut TickEngine, debouncer: &mut Debouncer, ticks: usize) -> DutyFrame {
        let mut frame = DutyFrame::SILENT;
        for i in 0..ticks {
            if i % 1000 == 0 {
                debouncer.on_edge(SENSOR);
            }
            frame = engine.tick();
        }
        frame
    }

    fn run_until(
        engine: &mut TickEngine,
        debouncer: &mut Debouncer,
        limit: usize,
        done: impl Fn(&TickEngine) -> bool,
    ) -> usize {
        for i in 0..limit {
            if i % 1000 == 0 {
                debouncer.on_edge(SENSOR);
            }
            engine.tick();
            if done(engine) {
                return i + 1;
            }
        }
        panic!("condition not reached in {} ticks", limit);
    }

    #[test]
    fn test_power_on_is_silent() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);

        for _ in 0..20_000 {
            assert_eq!(engine.tick(), DutyFrame::SILENT);
        }
        assert_eq!(link.event(), Event::None);
    }

    #[test]
    fn test_press_starts_cycle() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);
        let mut debouncer = Debouncer::new(&link, &tuning);

        press(&mut debouncer, BUTTON1);
        assert_eq!(link.event(), Event::Button1Pressed);

        let frame = engine.tick();
        assert_eq!(frame.motor, 0x80);
        assert_eq!(frame.audio, 1);
        assert_eq!(engine.phase(), SoundPhase::Starting);
        assert_eq!(engine.sound_count(), 0);
        assert_eq!(link.motor_duty(), 0x80);
    }

    #[test]
    fn test_sensor_missing_stops_train() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);
        let mut debouncer = Debouncer::new(&link, &tuning);
        press(&mut debouncer, BUTTON1);

        // Window spans sensor_window_ticks + 1 ticks
        for _ in 0..tuning.sensor_window_ticks {
            engine.tick();
        }
        assert_eq!(link.event(), Event::Button1Pressed);

        let frame = engine.tick();
        assert_eq!(link.event(), Event::SensorMissing);
        assert_eq!(frame.motor, 0);
        assert_eq!(engine.phase(), SoundPhase::None);

        // Latched until the next button cycle
        let frame = run(&mut engine, &mut debouncer, 20_000);
        assert_eq!(link.event(), Event::SensorMissing);
        assert_eq!(frame, DutyFrame::SILENT);

        press(&mut debouncer, BUTTON1);
        assert_eq!(link.event(), Event::Button1Pressed);
    }

    #[test]
    fn test_sensor_pulses_keep_train_running() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);
        let mut debouncer = Debouncer::new(&link, &tuning);
        press(&mut debouncer, BUTTON1);

        run(&mut engine, &mut debouncer, 50_000);
        assert_eq!(link.event(), Event::Button1Pressed);
        assert!(engine.motor_duty() > 0x80);
    }

    #[test]
    fn test_first_ring_window_fades_in() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);
        let mut debouncer = Debouncer::new(&link, &tuning);
        press(&mut debouncer, BUTTON1);

        let ring_start = tuning.started_count() + 15;
        run_until(&mut engine, &mut debouncer, 100_000, |e| {
            e.sound_count() == ring_start
        });
        assert_eq!(engine.phase(), SoundPhase::Running);

        // Running delay holds the faded-out level, then the bell fades in
        let delay = tuning.running_delay() as usize;
        let amps: Vec<u8> = (0..delay + 0x80).map(|_| engine.tick().audio).collect();
        assert_eq!(engine.phase(), SoundPhase::Ringing);
        assert!(amps[..delay].iter().all(|&a| a == 0));
        let expected: Vec<u8> = (1..=0x80).collect();
        assert_eq!(&amps[delay..], &expected[..]);
    }

    #[test]
    fn test_interlude_schedule_repeats() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);
        let mut debouncer = Debouncer::new(&link, &tuning);
        press(&mut debouncer, BUTTON1);

        let end = tuning.schedule_end().unwrap();
        run_until(&mut engine, &mut debouncer, 200_000, |e| {
            e.sound_count() == end - 1
        });
        assert_eq!(engine.phase(), SoundPhase::Ringing);

        // The count touches the schedule end for one tick, then rewinds
        run_until(&mut engine, &mut debouncer, 50_000, |e| {
            assert!(e.sound_count() <= end);
            e.sound_count() == tuning.started_count() + 1
        });

        let mut phases = Vec::new();
        for _ in 0..1000 {
            engine.tick();
            phases.push(engine.phase());
        }
        assert!(phases.iter().all(|&p| p == SoundPhase::Running));
    }

    #[test]
    fn test_whistle_interrupts_run() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);
        let mut debouncer = Debouncer::new(&link, &tuning);
        press(&mut debouncer, BUTTON1);
        run(&mut engine, &mut debouncer, 10_000);
        assert!(engine.motor_duty() > 0);

        press(&mut debouncer, BUTTON2);
        let frame = engine.tick();
        assert_eq!(frame.motor, 0);
        assert_eq!(engine.phase(), SoundPhase::Whistling);
        assert_eq!(engine.sound_count(), 0);

        // Sensor edges while the whistle is held report button 2 asserted
        let held = InputLevels {
            sensor: true,
            ..BUTTON2
        };
        for i in 0..5000 {
            if i % 1000 == 0 {
                assert_eq!(debouncer.on_edge(held), EdgeAction::Settle(Button::Two));
            }
            let frame = engine.tick();
            assert_eq!(frame.motor, 0);
            assert_eq!(engine.phase(), SoundPhase::Whistling);
        }
        assert_eq!(link.event(), Event::Button2Pressed);

        assert_eq!(debouncer.on_edge(IDLE), EdgeAction::Released);
        let frame = engine.tick();
        assert_eq!(engine.phase(), SoundPhase::None);
        assert_eq!(frame, DutyFrame::SILENT);

        // The next button 1 press starts a fresh run from rest
        press(&mut debouncer, BUTTON1);
        let frame = engine.tick();
        assert_eq!(link.event(), Event::Button1Pressed);
        assert_eq!(frame.motor, 0x80);
        assert_eq!(engine.phase(), SoundPhase::Starting);
    }

    #[test]
    fn test_stop_from_full_speed() {
        let link = ControlLink::new();
        let tuning = Tuning::default();
        let mut engine = TickEngine::new(&link, &tuning);
        let mut debouncer = Debouncer::new(&link, &tuning);
        press(&mut debouncer, BUTTON1);

        let climb = (0xFF - 0x80) * tuning.motor_start_period as usize;
        run(&mut engine, &mut debouncer, climb);
        assert_eq!(engine.motor_duty(), 0xFF);

        press(&mut debouncer, BUTTON1);
        assert_eq!(link.event(), Event::Button1Released);

        let mut pass_delays = Vec::new();
        let mut last_delay = 0;
        let fall = 0xFF * tuning.motor_stop_period as usize;
        for i in 0..fall {
            let frame = engine.tick();
            if i == 0 {
                assert_eq!(engine.phase(), SoundPhase::Stopping);
            }
            let delay = engine.player().delay();
            if last_delay == 0 && delay > 0 {
                pass_delays.push(delay);
            }
            last_delay = delay;

            if i + 1 < fall {
                assert!(frame.motor > 0, "stopped early at tick {}", i);
            } else {
                assert_eq!(frame.motor, 0);
            }
        }

        assert_eq!(pass_delays, [200, 1200, 2200]);
        assert_eq!(engine.phase(), SoundPhase::None);
        assert_eq!(engine.tick().audio, 0);
    }

    #[derive(Debug, Clone, Copy)]
    enum Stimulus {
        Button1,
        Button2,
        Release,
        Pulse,
    }

    fn stimulus() -> impl Strategy<Value = Stimulus> {
        prop_oneof![
            Just(Stimulus::Button1),
            Just(Stimulus::Button2),
            Just(Stimulus::Release),
            Just(Stimulus::Pulse),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_outputs_stay_well_formed(
            script in proptest::collection::vec((stimulus(), 1usize..3000), 1..24)
        ) {
            let link = ControlLink::new();
            let tuning = Tuning::default();
            let mut engine = TickEngine::new(&link, &tuning);
            let mut debouncer = Debouncer::new(&link, &tuning);

            for (stimulus, ticks) in script {
                match stimulus {
                    Stimulus::Button1 => press(&mut debouncer, BUTTON1),
                    Stimulus::Button2 => press(&mut debouncer, BUTTON2),
                    Stimulus::Release => {
                        debouncer.on_edge(IDLE);
                    }
                    Stimulus::Pulse => {
                        debouncer.on_edge(SENSOR);
                    }
                }

                for _ in 0..ticks {
                    let before = engine.motor_duty();
                    let frame = engine.tick();
                    let event = link.event();

                    let jump_start = before == 0 && frame.motor == tuning.motor_start_duty;
                    let cut = frame.motor == 0 && event.forces_stop();
                    prop_assert!(before.abs_diff(frame.motor) <= 1 || jump_start || cut);
                    prop_assert!(frame.motor <= tuning.motor_max_duty);

                    let len = engine.phase().samples().len();
                    prop_assert!(engine.player().index() as usize <= len);
                    prop_assert_eq!(link.sound_count(), engine.sound_count());
                }
            }
        }
    }
}
