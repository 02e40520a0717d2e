//! Puffer - Toy Train Controller Firmware
//!
//! Main firmware binary for RP2040-based toy trains. Button 1 starts and
//! stops the train, button 2 blows the whistle, and a track sensor stops
//! the motor when the train is lifted or stalls.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use puffer_core::config::Tuning;
use puffer_core::input::{Debouncer, InputLines};
use puffer_core::output::PwmOutputs;
use puffer_core::power::IdleMonitor;
use puffer_core::scheduler::TickEngine;

mod channels;
mod config;
mod tasks;

/// 125 MHz / 16 / 256 gives roughly a 30 kHz carrier for both channels
const PWM_DIVIDER: u8 = 16;

static TUNING: StaticCell<Tuning> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Puffer firmware starting...");

    let p = embassy_rp::init(Default::default());

    let tuning: &'static Tuning = TUNING.init(config::embedded_tuning());
    info!(
        "Tuning: {} Hz tick, started after {} passes, stopped after {}",
        tuning.tick_rate_hz,
        tuning.started_count(),
        tuning.stopped_count()
    );

    // Motor on GPIO0 (PWM0 A), speaker on GPIO1 (PWM0 B), 8-bit duty
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = u16::from(u8::MAX);
    pwm_config.divider = PWM_DIVIDER.to_fixed();
    let pwm = Pwm::new_output_ab(p.PWM_SLICE0, p.PIN_0, p.PIN_1, pwm_config);
    let (Some(motor), Some(audio)) = pwm.split() else {
        defmt::panic!("PWM slice 0 did not yield both outputs");
    };
    let outputs = PwmOutputs::new(motor, audio);

    // Buttons are active low; the sensor pull stays off until the train runs
    let button1 = Input::new(p.PIN_3, Pull::Up);
    let button2 = Input::new(p.PIN_4, Pull::Up);
    let mut sensor = Flex::new(p.PIN_2);
    sensor.set_as_input();
    sensor.set_pull(Pull::None);
    let lines = InputLines::new(button1, button2, sensor);

    let engine = TickEngine::new(&channels::LINK, tuning);
    let debouncer = Debouncer::new(&channels::LINK, tuning);

    info!("Spawning tasks...");

    spawner
        .spawn(tasks::tick_task(engine, outputs, tuning.tick_period_us()))
        .unwrap();
    spawner
        .spawn(tasks::input_task(lines, debouncer, u64::from(tuning.settle_ms)))
        .unwrap();

    info!("All tasks spawned, train ready");

    tasks::idle_loop(IdleMonitor::new(tuning)).await
}
