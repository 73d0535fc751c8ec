//! Scroll strategies
//!
//! Text scrolling moves the window base through display memory. The Life
//! strategy leaves the base alone and evolves the visible window instead.

use glint_protocol::ScrollDirection;

use super::life::Life;

/// Outcome of one scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollEvent {
    /// The window moved by one increment
    Advanced,
    /// The end of the scroll range was reached
    Boundary,
    /// Life produced the next generation
    Evolved,
    /// Life was stable too long and the window was reseeded
    Reseeded,
}

impl ScrollEvent {
    /// True if the step hit the end of the scroll range
    pub fn is_boundary(self) -> bool {
        self == ScrollEvent::Boundary
    }
}

/// What a scroll step does
#[derive(Debug, Clone, Default)]
pub enum ScrollStrategy {
    #[default]
    Text,
    Life(Life),
}

/// Scroll parameters of the displayed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    /// Columns per step (0..=15, 0 stops movement)
    pub increment: u8,
    pub direction: ScrollDirection,
    /// Current heading; flips at the ends when bidirectional
    pub backward: bool,
    /// Steps to wait at the end of the range
    pub delay: u8,
    pub delay_counter: u8,
}

impl ScrollConfig {
    /// Build from mode byte values
    ///
    /// The increment is clamped to four bits. The end delay applies from
    /// the start except for pure backward scrolling, which jumps to the
    /// right end on the first step.
    pub fn new(increment: u8, direction: ScrollDirection, delay: u8) -> Self {
        let backward = direction == ScrollDirection::Backward;
        Self {
            increment: increment & 0x0F,
            direction,
            backward,
            delay,
            delay_counter: if backward { 0 } else { delay },
        }
    }
}

/// One text scroll step
///
/// `base` is kept in 8 bits: stepping backward past 0 wraps to a large
/// value, which the same range check as the right end then catches.
pub(super) fn text_step(config: &mut ScrollConfig, base: &mut u8, cursor: usize, width: u8) -> ScrollEvent {
    let candidate = if config.backward {
        base.wrapping_sub(config.increment)
    } else {
        base.wrapping_add(config.increment)
    };

    if usize::from(candidate) + usize::from(width) > cursor {
        if config.delay_counter > 0 {
            config.delay_counter -= 1;
        } else {
            config.delay_counter = config.delay;
            match config.direction {
                ScrollDirection::Bidirectional => config.backward = !config.backward,
                ScrollDirection::Backward => {
                    *base = cursor.saturating_sub(usize::from(width)) as u8;
                }
                ScrollDirection::Forward => *base = 0,
            }
        }
        ScrollEvent::Boundary
    } else {
        *base = candidate;
        ScrollEvent::Advanced
    }
}
