//! Input task
//!
//! Waits for an edge on the buttons (and on the track sensor while the
//! train runs), then hands the levels to the [`Debouncer`]. A button edge
//! is re-read after the settle delay instead of being filtered.

use defmt::*;
use embassy_futures::select::{select, select3};
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_time::Timer;

use puffer_core::input::{Debouncer, EdgeAction, InputLevels, InputLines, SensorPower};

use crate::channels;

/// Buttons pull up internally; the sensor pull is switched with the train
pub type TrainInputs = InputLines<Input<'static>, Input<'static>, Flex<'static>>;

fn read(lines: &mut TrainInputs) -> InputLevels {
    match lines.levels() {
        Ok(levels) => levels,
        Err(never) => match never {},
    }
}

#[embassy_executor::task]
pub async fn input_task(mut lines: TrainInputs, mut debouncer: Debouncer<'static>, settle_ms: u64) {
    info!("Input task started");

    let mut sensor_enabled = false;

    loop {
        if sensor_enabled {
            select3(
                lines.button1.wait_for_any_edge(),
                lines.button2.wait_for_any_edge(),
                lines.sensor.wait_for_any_edge(),
            )
            .await;
        } else {
            select(
                lines.button1.wait_for_any_edge(),
                lines.button2.wait_for_any_edge(),
            )
            .await;
        }

        if channels::wake() {
            info!("Woken by input edge");
        }

        let button = match debouncer.on_edge(read(&mut lines)) {
            EdgeAction::Settle(button) => button,
            EdgeAction::Released => {
                debug!("Whistle button released");
                continue;
            }
            EdgeAction::Ignored => continue,
        };

        Timer::after_millis(settle_ms).await;

        match debouncer.confirm(button, read(&mut lines)) {
            Some(SensorPower::Enable) => {
                lines.sensor.set_pull(Pull::Up);
                sensor_enabled = true;
                info!("Train started, track sensor enabled");
            }
            Some(SensorPower::Disable) => {
                lines.sensor.set_pull(Pull::None);
                sensor_enabled = false;
                info!("Train stopping, track sensor disabled");
            }
            None => {}
        }

        // Edges are only seen while awaited; pick up a release that
        // happened during the settle delay or after the re-read
        if debouncer.sync_release(read(&mut lines)) == EdgeAction::Released {
            debug!("Whistle button released");
        }
    }
}
