//! GPIO wrappers for STM32F0
//!
//! embassy-stm32 pins are type-erased, so every matrix line has the same
//! type and the whole matrix fits in one `MatrixDriver`.

use embassy_stm32::gpio::{Input, Output};
use glint_hal::{InputPin, OutputPin};

/// Matrix row or column line
pub struct LinePin<'d>(pub Output<'d>);

impl OutputPin for LinePin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Push-button line
///
/// Wiring (pull-up, active level) is decided by the board; wrap in
/// [`glint_hal::gpio::ActiveLow`] for the usual button-to-ground layout.
pub struct ButtonPin<'d>(pub Input<'d>);

impl InputPin for ButtonPin<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
