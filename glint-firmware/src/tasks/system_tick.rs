//! System tick task (slow tick)
//!
//! Paces scrolling and samples the button. Wakes the main loop whenever a
//! button event is pending.

use defmt::*;
use embassy_time::{Duration, Ticker};

use glint_core::{ScrollEvent, SlowTick};
use glint_hal::gpio::ActiveLow;
use glint_hal_stm32f0::ButtonPin;

use crate::channels::{SharedDisplay, BUTTON, BUTTON_EVENT, PLAYBACK, REFRESH};

#[embassy_executor::task]
pub async fn system_tick_task(
    display: &'static SharedDisplay,
    button: ActiveLow<ButtonPin<'static>>,
    longpress_ticks: u8,
    period_us: u64,
) {
    info!("System tick task started");

    let mut ticker = Ticker::every(Duration::from_micros(period_us));
    let mut tick = SlowTick::new(longpress_ticks);
    let mut gate = &REFRESH;

    loop {
        ticker.next().await;

        match tick.tick(&PLAYBACK, display, &mut gate, &BUTTON, button.is_pressed()) {
            Some(ScrollEvent::Reseeded) => debug!("Life: reseeded"),
            Some(event) if event.is_boundary() => trace!("Scroll: boundary"),
            _ => {}
        }

        if BUTTON.poll().is_some() {
            BUTTON_EVENT.signal(());
        }
    }
}
