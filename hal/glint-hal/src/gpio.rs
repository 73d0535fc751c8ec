//! GPIO pin abstractions
//!
//! Digital lines for the row/column matrix outputs and the push-button input.

/// Digital output pin
///
/// Implementations handle the register manipulation for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Push-button input with a defined active level
///
/// The button wiring decides whether "pressed" reads high or low; the
/// sampler only ever sees the logical level.
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> ActiveLow<P> {
    /// True while the button is held
    pub fn is_pressed(&self) -> bool {
        self.0.is_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Level(bool);

    impl InputPin for Level {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_active_low_button() {
        assert!(ActiveLow(Level(false)).is_pressed());
        assert!(!ActiveLow(Level(true)).is_pressed());
    }
}
