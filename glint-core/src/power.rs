//! Power manager
//!
//! Sleep is entered only on a long press and left only through the
//! button's pin-change wake source:
//!
//! 1. stop scrolling and blank the display (optionally show a sleep glyph)
//! 2. wait `blank_delay_ms` so the button is likely released
//! 3. arm the wake source and power down
//! 4. on wake, disarm, optionally show a wake glyph, wait `wake_delay_ms`
//! 5. resume scrolling, keeping or rewinding the playlist position

use embedded_hal_async::delay::DelayNs;
use glint_hal::WakeSource;

use crate::config::{PowerConfig, ResumeMode};
use crate::display::Display;
use crate::resources::Resources;
use crate::scheduler::Playback;
use crate::shared::Shared;

/// Sleep/wake sequencing around a wake source
pub struct PowerManager<W: WakeSource, D: DelayNs> {
    wake: W,
    delay: D,
    config: PowerConfig,
}

impl<W: WakeSource, D: DelayNs> PowerManager<W, D> {
    pub fn new(wake: W, delay: D, config: PowerConfig) -> Self {
        Self {
            wake,
            delay,
            config,
        }
    }

    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    /// Run one full sleep cycle; returns after wake-up
    pub async fn sleep<S, R, const N: usize>(&mut self, display: &S, resources: &R, playback: &Playback)
    where
        S: Shared<Target = Display<N>>,
        R: Resources + ?Sized,
    {
        playback.set_scroll_enabled(false);
        display.with(|d| {
            d.clear();
            if let Some(glyph) = self.config.sleep_glyph {
                d.append_glyph(glyph, resources);
            }
        });
        self.delay.delay_ms(self.config.blank_delay_ms).await;
        display.with(|d| d.clear());

        info!("power: sleeping");
        self.wake.arm();
        self.wake.power_down();
        self.wake.disarm();
        info!("power: woke up");

        if let Some(glyph) = self.config.wake_glyph {
            display.with(|d| {
                d.clear();
                d.append_glyph(glyph, resources);
            });
        }
        self.delay.delay_ms(self.config.wake_delay_ms).await;

        if self.config.resume == ResumeMode::Restart {
            playback.set_read_cursor(0);
        }
        playback.set_scroll_enabled(true);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fakes for the sleep sequence

    use core::cell::RefCell;
    use std::vec::Vec;

    use embedded_hal_async::delay::DelayNs;
    use glint_hal::WakeSource;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Step {
        Delay(u32),
        Arm,
        PowerDown,
        Disarm,
    }

    pub type Log = RefCell<Vec<Step>>;

    pub struct FakeWake<'a>(pub &'a Log);

    impl WakeSource for FakeWake<'_> {
        fn arm(&mut self) {
            self.0.borrow_mut().push(Step::Arm);
        }

        fn power_down(&mut self) {
            self.0.borrow_mut().push(Step::PowerDown);
        }

        fn disarm(&mut self) {
            self.0.borrow_mut().push(Step::Disarm);
        }
    }

    pub struct FakeDelay<'a>(pub &'a Log);

    impl DelayNs for FakeDelay<'_> {
        async fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Step::Delay(ns / 1_000_000));
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Step::Delay(ms));
        }
    }
}
