//! Push-button events
//!
//! The button state is one byte shared between the slow tick (producer)
//! and the main loop (consumer):
//!
//! ```text
//! ┌─────┬───────────┬──────┬───────┐
//! │  7  │   6 .. 2  │  1   │   0   │
//! │ ACK │     -     │ LONG │ PRESS │
//! └─────┴───────────┴──────┴───────┘
//! ```
//!
//! The producer writes the state bits, the consumer only ever sets `ACK`.
//! An event is pending while the byte equals its exact value: `0` for a
//! release, `PRESS | LONG` for a long press.

use portable_atomic::{AtomicU8, Ordering};

const PRESS: u8 = 1 << 0;
const LONG: u8 = 1 << 1;
const ACK: u8 = 1 << 7;
const LONGPRESS: u8 = PRESS | LONG;

/// Button event waiting for the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Short press released
    Release,
    /// Held for the long-press delay
    LongPress,
}

/// Button byte shared between tick and main loop
pub struct SharedButton(AtomicU8);

impl Default for SharedButton {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedButton {
    /// Start out released and acknowledged, so no event is pending
    pub const fn new() -> Self {
        Self(AtomicU8::new(ACK))
    }

    /// Pending event, if any
    pub fn poll(&self) -> Option<ButtonEvent> {
        match self.0.load(Ordering::Acquire) {
            0 => Some(ButtonEvent::Release),
            LONGPRESS => Some(ButtonEvent::LongPress),
            _ => None,
        }
    }

    /// Mark the pending event as handled
    pub fn acknowledge(&self) {
        self.0.fetch_or(ACK, Ordering::AcqRel);
    }

    fn load(&self) -> u8 {
        self.0.load(Ordering::Acquire)
    }

    fn store(&self, bits: u8) {
        self.0.store(bits, Ordering::Release);
    }
}

/// Producer side: turns one level sample per slow tick into state bits
#[derive(Debug, Clone)]
pub struct ButtonSampler {
    countdown: u8,
    longpress_ticks: u8,
}

impl ButtonSampler {
    pub const fn new(longpress_ticks: u8) -> Self {
        Self {
            countdown: 0,
            longpress_ticks,
        }
    }

    /// Take one sample of the button level
    pub fn sample(&mut self, button: &SharedButton, pressed: bool) {
        let bits = button.load();

        if !pressed {
            if bits & PRESS != 0 {
                // Clears ACK so a short press becomes a pending release;
                // after a long press LONG stays set and nothing is pending
                button.store(bits & !(PRESS | ACK));
            }
        } else if bits & PRESS == 0 {
            button.store(PRESS);
            self.countdown = self.longpress_ticks;
        } else if bits == PRESS {
            if self.countdown == 0 {
                button.store(LONGPRESS);
            } else {
                self.countdown -= 1;
            }
        }
    }
}
