//! Per-message mode byte
//!
//! Bit layout (bit 7 = MSB):
//! ```text
//! ┌─────┬─────────────┬─────┬─────────────┐
//! │  7  │   6  5  4   │  3  │   2  1  0   │
//! │ BI  │ delay index │ INC │ speed index │
//! └─────┴─────────────┴─────┴─────────────┘
//! ```
//! - BI: 0 = forward only, 1 = bidirectional
//! - delay index into [`DELAY_TABLE`] (scroll steps to pause at the ends)
//! - INC: 0 = 1 column per step, 1 = 5 columns per step
//! - speed index into [`SPEED_TABLE`] (slow ticks between scroll steps)

/// Pause at the end of the scroll range, in scroll steps
pub const DELAY_TABLE: [u8; 8] = [0, 1, 2, 3, 5, 8, 13, 21];

/// Slow ticks between scroll steps (smaller = faster)
pub const SPEED_TABLE: [u8; 8] = [50, 30, 18, 11, 7, 5, 3, 2];

/// Columns per step with the increment bit clear
pub const INCREMENT_FINE: u8 = 1;

/// Columns per step with the increment bit set (one glyph cell)
pub const INCREMENT_COARSE: u8 = 5;

// Bit positions
const BIDIRECTIONAL_BIT: u8 = 0x80;
const DELAY_SHIFT: u8 = 4;
const INCREMENT_BIT: u8 = 0x08;
const INDEX_MASK: u8 = 0x07;

/// Scrolling direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Content moves from right to left
    #[default]
    Forward,
    /// Content moves from left to right
    Backward,
    /// Content reverses direction at each end
    Bidirectional,
}

/// Scrolling parameters carried by a mode byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollSettings {
    /// Scrolling direction
    pub direction: ScrollDirection,
    /// Steps to wait at the end of the scroll range
    pub delay: u8,
    /// Columns moved per step
    pub increment: u8,
    /// Slow ticks between scroll steps
    pub speed: u8,
}

/// Raw mode byte of a stored message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeByte(pub u8);

impl ModeByte {
    /// Mode byte marking the end of the playlist
    pub const END_OF_PLAYLIST: ModeByte = ModeByte(crate::TERMINATOR);

    /// True if this byte ends the playlist
    pub fn is_end(self) -> bool {
        self == Self::END_OF_PLAYLIST
    }

    /// Decode the scrolling parameters
    pub fn decode(self) -> ScrollSettings {
        let bits = self.0;
        let direction = if bits & BIDIRECTIONAL_BIT != 0 {
            ScrollDirection::Bidirectional
        } else {
            ScrollDirection::Forward
        };
        let increment = if bits & INCREMENT_BIT != 0 {
            INCREMENT_COARSE
        } else {
            INCREMENT_FINE
        };

        ScrollSettings {
            direction,
            delay: DELAY_TABLE[((bits >> DELAY_SHIFT) & INDEX_MASK) as usize],
            increment,
            speed: SPEED_TABLE[(bits & INDEX_MASK) as usize],
        }
    }

    /// Encode scrolling parameters
    ///
    /// Returns `None` if a value has no table entry or the direction is
    /// pure backward, which mode bytes cannot express.
    pub fn encode(settings: ScrollSettings) -> Option<Self> {
        let direction = match settings.direction {
            ScrollDirection::Forward => 0,
            ScrollDirection::Bidirectional => BIDIRECTIONAL_BIT,
            ScrollDirection::Backward => return None,
        };
        let increment = match settings.increment {
            INCREMENT_FINE => 0,
            INCREMENT_COARSE => INCREMENT_BIT,
            _ => return None,
        };
        let delay = DELAY_TABLE.iter().position(|&d| d == settings.delay)? as u8;
        let speed = SPEED_TABLE.iter().position(|&s| s == settings.speed)? as u8;

        Some(ModeByte(direction | (delay << DELAY_SHIFT) | increment | speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_0x44() {
        let settings = ModeByte(0x44).decode();
        assert_eq!(settings.direction, ScrollDirection::Forward);
        assert_eq!(settings.delay, 5);
        assert_eq!(settings.increment, 1);
        assert_eq!(settings.speed, 7);
    }

    #[test]
    fn test_decode_all_bits_set() {
        let settings = ModeByte(0xFF).decode();
        assert_eq!(settings.direction, ScrollDirection::Bidirectional);
        assert_eq!(settings.delay, 21);
        assert_eq!(settings.increment, 5);
        assert_eq!(settings.speed, 2);
    }

    #[test]
    fn test_encode_matches_decode() {
        for byte in 1..=255u8 {
            let settings = ModeByte(byte).decode();
            assert_eq!(ModeByte::encode(settings), Some(ModeByte(byte)));
        }
    }

    #[test]
    fn test_encode_rejects_unrepresentable() {
        let mut settings = ModeByte(0x44).decode();
        settings.speed = 4;
        assert_eq!(ModeByte::encode(settings), None);

        let mut settings = ModeByte(0x44).decode();
        settings.direction = ScrollDirection::Backward;
        assert_eq!(ModeByte::encode(settings), None);
    }

    #[test]
    fn test_end_of_playlist() {
        assert!(ModeByte(0).is_end());
        assert!(!ModeByte(0x44).is_end());
    }
}
