//! Idle power loop
//!
//! Runs on the main task once everything is spawned. After the grace
//! period it parks the tick task and waits for the input task to wake it.

use defmt::*;
use embassy_time::Timer;
use portable_atomic::Ordering;

use puffer_core::power::{IdleAction, IdleMonitor};

use crate::channels::{DORMANT, LINK, POWER_WAKE};

pub async fn idle_loop(mut monitor: IdleMonitor) -> ! {
    loop {
        match monitor.poll(LINK.event()) {
            IdleAction::Wait(ms) => Timer::after_millis(u64::from(ms)).await,
            IdleAction::Sleep => {
                info!("Train idle, going dormant");
                POWER_WAKE.reset();
                DORMANT.store(true, Ordering::Release);
                POWER_WAKE.wait().await;
                debug!("Power loop resumed");
            }
        }
    }
}
