//! STOP-mode sleep for STM32F0
//!
//! The button's EXTI line is switched to event mode while asleep, so a
//! falling edge wakes the core from `WFE` without an interrupt handler.
//!
//! The line must be routed to the button's port in SYSCFG. Port A is the
//! reset default, which is where the Glint boards put the button.
//! Clocks come back on HSI after STOP, which matches the default
//! embassy-stm32 clock config on F0.

use cortex_m::peripheral::SCB;
use embassy_stm32::pac::EXTI;
use glint_hal::WakeSource;

/// Wake source on a falling edge of an EXTI line
pub struct StopWake {
    scb: SCB,
    line: usize,
}

impl StopWake {
    /// `line` is the button's pin number (EXTI lines follow pin numbers)
    pub fn new(scb: SCB, line: usize) -> Self {
        Self { scb, line }
    }
}

impl WakeSource for StopWake {
    fn arm(&mut self) {
        EXTI.rtsr(0).modify(|w| w.set_line(self.line, false));
        EXTI.ftsr(0).modify(|w| w.set_line(self.line, true));
        EXTI.emr(0).modify(|w| w.set_line(self.line, true));
    }

    /// Returns on the first wake event
    fn power_down(&mut self) {
        self.scb.set_sleepdeep();
        // Clear a stale event latch so the second WFE really sleeps
        cortex_m::asm::sev();
        cortex_m::asm::wfe();
        cortex_m::asm::wfe();
        self.scb.clear_sleepdeep();
    }

    fn disarm(&mut self) {
        EXTI.emr(0).modify(|w| w.set_line(self.line, false));
        EXTI.ftsr(0).modify(|w| w.set_line(self.line, false));
    }
}
