//! Message renderer
//!
//! Turns one store record into display memory and reports where the next
//! record starts.

use glint_hal::{ByteStore, StoreError};
use glint_protocol::{ModeByte, PayloadReader, Unit};

use crate::display::Display;
use crate::resources::Resources;

/// Errors from rendering a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// The mode byte or raw block could not be read
    Store(StoreError),
}

impl From<StoreError> for RenderError {
    fn from(e: StoreError) -> Self {
        RenderError::Store(e)
    }
}

/// Result of rendering one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rendered {
    /// Offset of the following record, 0 at the end of the playlist
    pub next_offset: usize,
    /// Slow ticks between scroll steps for this message
    pub speed: u8,
    /// Some columns did not fit into display memory
    pub truncated: bool,
}

/// Renders store records using the given font and animations
pub struct Renderer<'r, R: Resources + ?Sized> {
    resources: &'r R,
}

impl<'r, R: Resources + ?Sized> Renderer<'r, R> {
    pub fn new(resources: &'r R) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &'r R {
        self.resources
    }

    /// Render the record at `offset` and return the next record's offset
    pub fn render<S, const N: usize>(
        &self,
        store: &S,
        offset: usize,
        display: &mut Display<N>,
    ) -> Result<Rendered, RenderError>
    where
        S: ByteStore + ?Sized,
    {
        let settings = ModeByte(store.read(offset)?).decode();
        display.configure_scroll(settings.increment, settings.direction, settings.delay);
        display.clear();

        let mut reader = PayloadReader::new(store, offset + 1);
        while let Some(unit) = reader.next_unit() {
            match unit {
                Unit::Glyph(code) => display.append_glyph(code, self.resources),
                Unit::Animation(index) => match self.resources.animation(index) {
                    Some(image) => display.append_image(image),
                    None => debug!("render: no animation {=u8}", index),
                },
                Unit::Raw { start, len } => {
                    for pos in start..start + len {
                        display.append_raw(store.read(pos)?);
                    }
                }
                Unit::Truncated => {}
            }
            if reader.has_more() {
                display.append_raw(0);
            }
        }

        // Skip the terminator; an end marker or the end of the store wraps
        let next = reader.position() + 1;
        let next_offset = match store.read(next) {
            Ok(mode) if !ModeByte(mode).is_end() => next,
            _ => 0,
        };

        let truncated = display.truncated();
        if truncated {
            warn!("render: message at {=usize} truncated", offset);
        }

        Ok(Rendered {
            next_offset,
            speed: settings.speed,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Geometry;
    use crate::resources::testing::resources;
    use glint_hal::MemoryStore;
    use glint_protocol::ScrollDirection;
    use proptest::prelude::*;

    fn render(bytes: &[u8], offset: usize) -> (Display<64>, Result<Rendered, RenderError>) {
        let res = resources();
        let store = MemoryStore::<64>::from_bytes(bytes);
        let mut display = Display::new(Geometry::default());
        let result = Renderer::new(&res).render(&store, offset, &mut display);
        (display, result)
    }

    fn columns(display: &Display<64>) -> Vec<u8> {
        (0..display.cursor()).map(|i| display.column(i)).collect()
    }

    #[test]
    fn test_hi_with_spacing() {
        let (display, result) = render(b"\x44Hi\0\0", 0);
        let rendered = result.unwrap();
        assert_eq!(display.cursor(), 5 + 1 + 1);
        assert_eq!(rendered.speed, 7);
        assert_eq!(rendered.next_offset, 0);
        assert!(!rendered.truncated);

        let scroll = display.scroll_config();
        assert_eq!(scroll.direction, ScrollDirection::Forward);
        assert_eq!(scroll.delay, 5);
        assert_eq!(scroll.increment, 1);
    }

    #[test]
    fn test_next_offset_follows_records() {
        let store = b"\x44H\0\x4Fi\0\0";
        let (_, first) = render(store, 0);
        assert_eq!(first.unwrap().next_offset, 3);

        let (display, second) = render(store, 3);
        let second = second.unwrap();
        assert_eq!(second.next_offset, 0);
        assert_eq!(second.speed, 2);
        assert_eq!(columns(&display), [0x7D]);
    }

    #[test]
    fn test_escaped_glyphs() {
        let (display, _) = render(b"\x44^^\0\0", 0);
        assert_eq!(columns(&display), [0x02, 0x01, 0x02]);

        let (display, _) = render(b"\x44^A\0\0", 0);
        assert_eq!(columns(&display), [(b'A' + 63) & 0x7F]);
    }

    #[test]
    fn test_animation_and_skipped_animation() {
        let (display, _) = render(b"\x44~A~Z\0\0", 0);
        // Arrow, spacing, nothing for the missing animation
        assert_eq!(columns(&display), [0x08, 0x1C, 0x3E, 0x00]);
    }

    #[test]
    fn test_raw_block_verbatim() {
        let (display, _) = render(&[0x44, 0xFF, 0x00, 0x55, 0x80, 0xFF, b'i', 0, 0], 0);
        assert_eq!(columns(&display), [0x00, 0x55, 0x80, 0x00, 0x7D]);
    }

    #[test]
    fn test_truncated_escape() {
        let (display, result) = render(b"\x44i^\0\0", 0);
        assert_eq!(columns(&display), [0x7D, 0x00]);
        assert_eq!(result.unwrap().next_offset, 0);
    }

    #[test]
    fn test_end_of_store_wraps() {
        let res = resources();
        let store = MemoryStore::<4>::from_bytes(b"\x44iii");
        let mut display = Display::<64>::new(Geometry::default());
        let rendered = Renderer::new(&res).render(&store, 0, &mut display).unwrap();
        assert_eq!(rendered.next_offset, 0);
        assert_eq!(display.cursor(), 5);
    }

    #[test]
    fn test_overflow_reported() {
        let res = resources();
        let store = MemoryStore::<16>::from_bytes(b"\x44HHH\0");
        let mut display = Display::<8>::new(Geometry::default());
        let rendered = Renderer::new(&res).render(&store, 0, &mut display).unwrap();
        assert!(rendered.truncated);
        assert_eq!(display.cursor(), 8);
    }

    #[test]
    fn test_mode_byte_out_of_range() {
        let (_, result) = render(b"", 64);
        assert_eq!(result, Err(RenderError::Store(StoreError::OutOfRange)));
    }

    proptest! {
        #[test]
        fn prop_render_any_store(
            bytes in proptest::collection::vec(any::<u8>(), 0..=64),
            offset in 0usize..64,
        ) {
            let (display, result) = render(&bytes, offset);
            let rendered = result.unwrap();
            prop_assert!(rendered.next_offset < 64);
            prop_assert!(rendered.next_offset == 0 || rendered.next_offset > offset);
            prop_assert!(display.cursor() <= 64);
        }
    }
}
