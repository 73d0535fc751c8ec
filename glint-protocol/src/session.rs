//! Serial upload session
//!
//! One byte is processed per receive event. The session writes decoded
//! bytes straight into the message store at its own write cursor; there is
//! no buffering beyond the byte being processed.
//!
//! | state | input | transition / effect |
//! |---|---|---|
//! | any | ESC | → Reset |
//! | Idle | `'H'` | → Authenticating |
//! | Authenticating | `'L'` | → Normal |
//! | Authenticating | other | stay (only ESC recovers) |
//! | CrLf | CR / LF | stay |
//! | CrLf | other | → Normal, byte handled as Normal |
//! | Normal | `'^'` | → SpecialChar |
//! | Normal | `'$'` | clear accumulator → HexCode |
//! | Normal | CR / LF | store `0x00` → CrLf |
//! | Normal | other | store byte |
//! | SpecialChar | any | store `byte + 63` → Normal |
//! | HexCode | hex digit | shift nibble into accumulator |
//! | HexCode | other | store accumulator, byte dropped → Normal |
//! | Reset | any | write cursor → 0, byte dropped → Idle |

use glint_hal::{ByteStore, StoreError};

use crate::mode::ModeByte;
use crate::payload::SHIFT_OFFSET;
use crate::TERMINATOR;

/// Escape: resets the session from any state
pub const ESC: u8 = 27;

/// First handshake byte
pub const HANDSHAKE: u8 = b'H';

/// Second handshake byte for store uploads
pub const HANDSHAKE_STORE: u8 = b'L';

/// Second handshake byte for live display sessions
pub const HANDSHAKE_LIVE: u8 = b'D';

/// Prefix for a hex-coded byte
pub const HEX_PREFIX: u8 = b'$';

/// Prefix for a byte shifted by 63
pub const SHIFT_PREFIX: u8 = b'^';

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Waiting for the first handshake byte
    Idle,
    /// First handshake byte seen
    Authenticating,
    /// Storing bytes
    Normal,
    /// Next byte is stored shifted by 63
    SpecialChar,
    /// Accumulating hex digits
    HexCode,
    /// Swallowing line-end repeats after a terminator
    CrLf,
    /// ESC received; the next byte completes the reset
    Reset,
    /// Live session: next byte is a mode byte
    LiveMode,
    /// Live session: bytes are shown immediately
    LiveText,
}

/// Session options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionConfig {
    /// Accept the `'H'`,`'D'` handshake for live display sessions
    pub live_display: bool,
}

/// Effect of one processed byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feed {
    /// Nothing for the caller to do
    None,
    /// A byte was written to the store
    Stored(u8),
    /// The session was reset; rewind playback and show the logo
    Reset,
    /// Live session: clear the display and apply this mode byte
    LiveMode(ModeByte),
    /// Live session: append this glyph to the display
    LiveGlyph(u8),
}

/// Errors from processing a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// The write cursor reached the end of the reserved region
    StoreOverflow,
    /// The store rejected the write
    Store(StoreError),
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::OutOfRange => SessionError::StoreOverflow,
            other => SessionError::Store(other),
        }
    }
}

/// Serial upload session
#[derive(Debug, Clone)]
pub struct SerialSession {
    state: SessionState,
    hex_accumulator: u8,
    write_cursor: usize,
    config: SessionConfig,
}

impl Default for SerialSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SerialSession {
    /// Create a new session in `Idle`, writing from offset 0
    pub const fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::Idle,
            hex_accumulator: 0,
            write_cursor: 0,
            config,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Offset of the next store write
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Process one received byte
    ///
    /// On error the state transition still happens but the write is
    /// rejected and the write cursor does not advance.
    pub fn feed<S: ByteStore + ?Sized>(
        &mut self,
        byte: u8,
        store: &mut S,
    ) -> Result<Feed, SessionError> {
        if byte == ESC {
            self.state = SessionState::Reset;
            return Ok(Feed::None);
        }

        match self.state {
            SessionState::Idle => {
                if byte == HANDSHAKE {
                    self.state = SessionState::Authenticating;
                }
                Ok(Feed::None)
            }
            SessionState::Authenticating => {
                match byte {
                    HANDSHAKE_STORE => self.state = SessionState::Normal,
                    HANDSHAKE_LIVE if self.config.live_display => {
                        self.state = SessionState::LiveMode;
                    }
                    _ => {}
                }
                Ok(Feed::None)
            }
            SessionState::CrLf => {
                if is_line_end(byte) {
                    Ok(Feed::None)
                } else {
                    self.state = SessionState::Normal;
                    self.normal(byte, store)
                }
            }
            SessionState::Normal => self.normal(byte, store),
            SessionState::SpecialChar => {
                self.state = SessionState::Normal;
                self.store(store, byte.wrapping_add(SHIFT_OFFSET))
            }
            SessionState::HexCode => match hex_digit(byte) {
                Some(nibble) => {
                    self.hex_accumulator = (self.hex_accumulator << 4) | nibble;
                    Ok(Feed::None)
                }
                None => {
                    self.state = SessionState::Normal;
                    self.store(store, self.hex_accumulator)
                }
            },
            SessionState::Reset => {
                self.write_cursor = 0;
                self.hex_accumulator = 0;
                self.state = SessionState::Idle;
                Ok(Feed::Reset)
            }
            SessionState::LiveMode => {
                if is_line_end(byte) {
                    return Ok(Feed::None);
                }
                self.state = SessionState::LiveText;
                Ok(Feed::LiveMode(ModeByte(byte)))
            }
            SessionState::LiveText => {
                if is_line_end(byte) {
                    self.state = SessionState::LiveMode;
                    Ok(Feed::None)
                } else {
                    Ok(Feed::LiveGlyph(byte))
                }
            }
        }
    }

    fn normal<S: ByteStore + ?Sized>(
        &mut self,
        byte: u8,
        store: &mut S,
    ) -> Result<Feed, SessionError> {
        match byte {
            SHIFT_PREFIX => {
                self.state = SessionState::SpecialChar;
                Ok(Feed::None)
            }
            HEX_PREFIX => {
                self.hex_accumulator = 0;
                self.state = SessionState::HexCode;
                Ok(Feed::None)
            }
            CR | LF => {
                self.state = SessionState::CrLf;
                self.store(store, TERMINATOR)
            }
            _ => self.store(store, byte),
        }
    }

    fn store<S: ByteStore + ?Sized>(
        &mut self,
        store: &mut S,
        value: u8,
    ) -> Result<Feed, SessionError> {
        if self.write_cursor >= store.capacity() {
            return Err(SessionError::StoreOverflow);
        }
        store.write(self.write_cursor, value)?;
        self.write_cursor += 1;
        Ok(Feed::Stored(value))
    }
}

fn is_line_end(byte: u8) -> bool {
    byte == CR || byte == LF
}

/// Value of a hex digit
///
/// Uppercase only. The characters between `'9'` and `'A'` (`':'` through
/// `'?'`) decode as 10..15, matching the arithmetic of the upload tools.
pub fn hex_digit(byte: u8) -> Option<u8> {
    let mut value = byte.wrapping_sub(b'0');
    if value >= 17 {
        value = value.wrapping_sub(7);
    }
    (value < 16).then_some(value)
}
