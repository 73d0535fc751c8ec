//! Power-down and wake-up
//!
//! The pendant has a single wake source: a pin change on the button line.

/// Full-stop sleep with a pin-change wake source
pub trait WakeSource {
    /// Arm the pin-change interrupt as the only wake source
    fn arm(&mut self);

    /// Enter power-down and return once the pin-change has fired
    ///
    /// Blocks the whole device; nothing else runs while asleep.
    fn power_down(&mut self);

    /// Disarm the pin-change interrupt after waking
    fn disarm(&mut self);
}
