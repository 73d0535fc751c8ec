//! Upload stream builder
//!
//! Produces the byte stream a host sends to program the store: ESC, a
//! line end, the `'H'`,`'L'` handshake, then one line per message and a
//! final `$00,` end-of-playlist marker.

use heapless::Vec;

use crate::mode::{ModeByte, ScrollSettings};
use crate::payload::{SHIFT, SHIFT_OFFSET};
use crate::session::{ESC, HANDSHAKE, HANDSHAKE_STORE, HEX_PREFIX, SHIFT_PREFIX};

/// Errors from building an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UploadError {
    /// The output buffer is full
    BufferFull,
    /// A message cannot use the end-of-playlist mode byte
    EndMarkerMode,
    /// The scroll settings have no mode byte encoding
    Unencodable,
}

/// Builds an upload byte stream into a fixed-size buffer
#[derive(Debug, Clone)]
pub struct UploadBuilder<const N: usize> {
    out: Vec<u8, N>,
}

impl<const N: usize> UploadBuilder<N> {
    /// Start a stream with the reset sequence and handshake
    pub fn new() -> Result<Self, UploadError> {
        let mut builder = Self { out: Vec::new() };
        builder.push_all(&[ESC, b'\r', HANDSHAKE, HANDSHAKE_STORE])?;
        Ok(builder)
    }

    /// Append one message with raw payload bytes
    ///
    /// Payload bytes are stored as given, so they may contain the payload
    /// escapes (`'~'` animations, `0xFF` raw blocks). Bytes that the
    /// serial session would interpret are escaped here.
    pub fn message(&mut self, mode: ModeByte, payload: &[u8]) -> Result<(), UploadError> {
        if mode.is_end() {
            return Err(UploadError::EndMarkerMode);
        }
        self.push_mode(mode.0)?;
        for &byte in payload {
            self.push_escaped(byte)?;
        }
        self.push(b'\r')
    }

    /// Append one message from text
    ///
    /// Characters up to U+00FF map to their Latin-1 byte; others become
    /// `'?'`. A `'^'` in the text is doubled so it shows as a literal.
    pub fn text(&mut self, mode: ModeByte, text: &str) -> Result<(), UploadError> {
        if mode.is_end() {
            return Err(UploadError::EndMarkerMode);
        }
        self.push_mode(mode.0)?;
        for ch in text.chars() {
            let byte = u8::try_from(u32::from(ch)).unwrap_or(b'?');
            if byte == SHIFT {
                // Stored as "^^", the payload escape for a literal '^'
                self.push_hex(SHIFT)?;
                self.push_hex(SHIFT)?;
            } else {
                self.push_escaped(byte)?;
            }
        }
        self.push(b'\r')
    }

    /// Append one text message scrolled with `settings`
    pub fn scrolling_text(
        &mut self,
        settings: ScrollSettings,
        text: &str,
    ) -> Result<(), UploadError> {
        let mode = ModeByte::encode(settings).ok_or(UploadError::Unencodable)?;
        self.text(mode, text)
    }

    /// Append the end-of-playlist marker and return the stream
    pub fn finish(mut self) -> Result<Vec<u8, N>, UploadError> {
        self.push_hex(0)?;
        Ok(self.out)
    }

    /// Bytes built so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    fn push_mode(&mut self, mode: u8) -> Result<(), UploadError> {
        if needs_hex(mode) || mode >= 0x80 {
            self.push_hex(mode)
        } else {
            self.push(mode)
        }
    }

    fn push_escaped(&mut self, byte: u8) -> Result<(), UploadError> {
        if byte >= 0x80 {
            self.push_all(&[SHIFT_PREFIX, byte - SHIFT_OFFSET])
        } else if needs_hex(byte) {
            self.push_hex(byte)
        } else {
            self.push(byte)
        }
    }

    fn push_hex(&mut self, byte: u8) -> Result<(), UploadError> {
        self.push_all(&[HEX_PREFIX, hex_char(byte >> 4), hex_char(byte & 0x0F), b','])
    }

    fn push(&mut self, byte: u8) -> Result<(), UploadError> {
        self.out.push(byte).map_err(|_| UploadError::BufferFull)
    }

    fn push_all(&mut self, bytes: &[u8]) -> Result<(), UploadError> {
        self.out
            .extend_from_slice(bytes)
            .map_err(|_| UploadError::BufferFull)
    }
}

/// Bytes the session would treat specially in the Normal state
fn needs_hex(byte: u8) -> bool {
    byte < 0x20 || byte == 0x7F || byte == SHIFT_PREFIX || byte == HEX_PREFIX
}

fn hex_char(nibble: u8) -> u8 {
    match nibble {
        0..=9 => b'0' + nibble,
        _ => b'A' + nibble - 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ScrollDirection;
    use crate::payload::{PayloadReader, Unit};
    use crate::session::SerialSession;
    use glint_hal::MemoryStore;

    fn upload(stream: &[u8]) -> MemoryStore<64> {
        let mut session = SerialSession::default();
        let mut store = MemoryStore::new();
        for &byte in stream {
            session.feed(byte, &mut store).unwrap();
        }
        store
    }

    #[test]
    fn test_stream_prefix() {
        let builder = UploadBuilder::<16>::new().unwrap();
        assert_eq!(builder.as_bytes(), &[ESC, b'\r', b'H', b'L']);
    }

    #[test]
    fn test_text_message_reaches_store() {
        let mut builder = UploadBuilder::<64>::new().unwrap();
        builder.text(ModeByte(0x44), "Hi").unwrap();
        let stream = builder.finish().unwrap();

        let store = upload(&stream);
        assert_eq!(&store.as_bytes()[..5], &[0x44, b'H', b'i', 0, 0]);
    }

    #[test]
    fn test_caret_and_extended_glyphs() {
        let mut builder = UploadBuilder::<64>::new().unwrap();
        builder.text(ModeByte(0x44), "^\u{e4}").unwrap();
        let stream = builder.finish().unwrap();

        let store = upload(&stream);
        let units: std::vec::Vec<Unit> = PayloadReader::new(&store, 1).collect();
        assert_eq!(units, [Unit::Glyph(b'^'), Unit::Glyph(0xE4)]);
    }

    #[test]
    fn test_control_and_mode_bytes_hex_coded() {
        let mut builder = UploadBuilder::<64>::new().unwrap();
        builder.message(ModeByte(0xC4), &[b'~', b'A', 0x0A]).unwrap();
        let stream = builder.finish().unwrap();
        assert!(stream.starts_with(&[ESC, b'\r', b'H', b'L', b'$', b'C', b'4', b',']));

        let store = upload(&stream);
        assert_eq!(&store.as_bytes()[..6], &[0xC4, b'~', b'A', 0x0A, 0, 0]);
    }

    #[test]
    fn test_end_marker_mode_rejected() {
        let mut builder = UploadBuilder::<64>::new().unwrap();
        assert_eq!(
            builder.text(ModeByte::END_OF_PLAYLIST, "x"),
            Err(UploadError::EndMarkerMode)
        );
    }

    #[test]
    fn test_scrolling_text_encodes_settings() {
        let settings = ScrollSettings {
            direction: ScrollDirection::Bidirectional,
            delay: 3,
            increment: 5,
            speed: 7,
        };
        let mut builder = UploadBuilder::<64>::new().unwrap();
        builder.scrolling_text(settings, "ok").unwrap();
        let stream = builder.finish().unwrap();

        let store = upload(&stream);
        assert_eq!(&store.as_bytes()[..4], &[0xBC, b'o', b'k', 0]);
        assert_eq!(ModeByte(store.as_bytes()[0]).decode(), settings);
    }

    #[test]
    fn test_scrolling_text_rejects_backward() {
        let mut settings = ModeByte(0x44).decode();
        settings.direction = ScrollDirection::Backward;
        let mut builder = UploadBuilder::<64>::new().unwrap();
        assert_eq!(
            builder.scrolling_text(settings, "x"),
            Err(UploadError::Unencodable)
        );
        assert_eq!(builder.as_bytes(), &[ESC, b'\r', b'H', b'L']);
    }

    #[test]
    fn test_buffer_full() {
        let mut builder = UploadBuilder::<8>::new().unwrap();
        assert_eq!(
            builder.text(ModeByte(0x44), "too long"),
            Err(UploadError::BufferFull)
        );
    }
}
