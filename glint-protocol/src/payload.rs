//! Payload escape grammar
//!
//! A record payload is a byte string terminated by `0x00`:
//!
//! | bytes | meaning |
//! |---|---|
//! | `'^'` `'^'` | literal `'^'` glyph |
//! | `'^'` X | extended glyph `X + 63` |
//! | `'~'` A..Z | animation `letter - 'A'` |
//! | `0xFF` ... `0xFF` | raw display columns, taken verbatim |
//! | anything else | glyph with that code |
//!
//! `'~'` `'~'` is *not* a literal tilde: it selects animation index
//! `'~' - 'A'`, which is out of range for any animation table.

use glint_hal::ByteStore;

use crate::TERMINATOR;

/// Shift prefix for extended glyphs
pub const SHIFT: u8 = b'^';

/// Offset added to the byte following [`SHIFT`]
pub const SHIFT_OFFSET: u8 = 63;

/// Animation prefix
pub const ANIMATION: u8 = b'~';

/// Opens and closes a raw column block
pub const RAW_BLOCK: u8 = 0xFF;

/// One decoded payload unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// Draw the glyph with this code
    Glyph(u8),
    /// Draw the animation at this index (may be out of range)
    Animation(u8),
    /// Copy `len` store bytes starting at `start` into display memory
    Raw { start: usize, len: usize },
    /// An escape prefix directly followed by the terminator
    Truncated,
}

/// Streams [`Unit`]s out of one record payload in the store
///
/// The reader never consumes the terminator, so after the last unit
/// [`PayloadReader::position`] points at it.
pub struct PayloadReader<'s, S: ByteStore + ?Sized> {
    store: &'s S,
    pos: usize,
}

impl<'s, S: ByteStore + ?Sized> PayloadReader<'s, S> {
    /// Start reading a payload at `offset`
    pub fn new(store: &'s S, offset: usize) -> Self {
        Self { store, pos: offset }
    }

    /// Current read position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True if another unit follows before the terminator
    pub fn has_more(&self) -> bool {
        self.peek() != TERMINATOR
    }

    /// Read past the end of the store behaves like a terminator
    fn peek(&self) -> u8 {
        self.store.read(self.pos).unwrap_or(TERMINATOR)
    }

    fn take(&mut self) -> u8 {
        let byte = self.peek();
        if byte != TERMINATOR {
            self.pos += 1;
        }
        byte
    }

    /// Decode the next unit, or `None` at the terminator
    pub fn next_unit(&mut self) -> Option<Unit> {
        let byte = self.take();
        match byte {
            TERMINATOR => None,
            ANIMATION => match self.take() {
                TERMINATOR => Some(Unit::Truncated),
                letter => Some(Unit::Animation(letter.wrapping_sub(b'A'))),
            },
            SHIFT => match self.take() {
                TERMINATOR => Some(Unit::Truncated),
                SHIFT => Some(Unit::Glyph(SHIFT)),
                code => Some(Unit::Glyph(code.wrapping_add(SHIFT_OFFSET))),
            },
            RAW_BLOCK => {
                // Raw columns may contain 0x00; only 0xFF or the end of
                // the store closes the block.
                let start = self.pos;
                let mut len = 0;
                loop {
                    match self.store.read(self.pos) {
                        Ok(RAW_BLOCK) => {
                            self.pos += 1;
                            break;
                        }
                        Ok(_) => {
                            self.pos += 1;
                            len += 1;
                        }
                        Err(_) => break,
                    }
                }
                Some(Unit::Raw { start, len })
            }
            code => Some(Unit::Glyph(code)),
        }
    }
}

impl<S: ByteStore + ?Sized> Iterator for PayloadReader<'_, S> {
    type Item = Unit;

    fn next(&mut self) -> Option<Unit> {
        self.next_unit()
    }
}
