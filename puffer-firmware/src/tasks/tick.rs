//! Tick task
//!
//! Runs the control engine once per audio sample and writes the motor and
//! speaker duties. Parks on [`TICK_WAKE`] while the board is dormant.

use defmt::*;
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use puffer_core::output::{DutyFrame, DutySink, PwmOutputs};
use puffer_core::scheduler::TickEngine;
use puffer_core::state::Event;

use crate::channels::{DORMANT, LINK, TICK_WAKE};

/// Motor on channel A, speaker on channel B of the same slice
pub type TrainOutputs = PwmOutputs<PwmOutput<'static>, PwmOutput<'static>>;

#[embassy_executor::task]
pub async fn tick_task(mut engine: TickEngine<'static>, mut outputs: TrainOutputs, period_us: u64) {
    info!("Tick task started ({} us period)", period_us);

    let mut ticker = Ticker::every(Duration::from_micros(period_us));
    let mut last_event = LINK.event();
    let mut last_phase = engine.phase();

    loop {
        if DORMANT.load(Ordering::Acquire) {
            if outputs.write(DutyFrame::SILENT).is_err() {
                warn!("Failed to silence outputs");
            }
            debug!("Tick task parked");
            TICK_WAKE.wait().await;
            debug!("Tick task resumed");
            ticker.reset();
        }

        if engine.tick_into(&mut outputs).is_err() {
            warn!("PWM duty write failed");
        }

        let event = LINK.event();
        if event != last_event {
            if event == Event::SensorMissing {
                warn!("No sensor pulse while running, stopping train");
            } else {
                debug!("Event: {} -> {}", last_event, event);
            }
            last_event = event;
        }

        let phase = engine.phase();
        if phase != last_phase {
            debug!(
                "Sound phase: {} -> {} (count {}, duty {})",
                last_phase,
                phase,
                engine.sound_count(),
                engine.motor_duty()
            );
            last_phase = phase;
        }

        ticker.next().await;
    }
}
