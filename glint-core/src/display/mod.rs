//! Display engine
//!
//! Display memory holds one byte per column (bit i = row i lit). Only a
//! window as wide as the matrix is visible; `base` selects where it starts.
//! Drawing appends at `cursor`, the fast tick walks the visible columns and
//! the slow tick moves the window.
//!
//! ```text
//!  memory: │ H H H H H 0 i 0 ... │ ............ │
//!            ▲         ▲           ▲
//!            base      window end  cursor
//! ```

mod life;
mod scroll;

pub use life::{Life, STABLE_LIMIT};
pub use scroll::{ScrollConfig, ScrollEvent, ScrollStrategy};

use glint_protocol::ScrollDirection;

use crate::config::{DisplayConfig, Geometry, StrategyKind, CHAR_WIDTH, MAX_MATRIX_SIDE};
use crate::resources::{Resources, END_OF_DATA, FONT_OFFSET};

/// Column selected by one refresh step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColumnFrame {
    /// Window column index
    pub column: u8,
    /// Row bits to light
    pub pattern: u8,
}

/// Stop bit marking the end of a narrow glyph
const GLYPH_END: u8 = 0x80;

/// Map Latin-1 umlauts and sharp s onto the extended font slots
fn remap_glyph(code: u8) -> u8 {
    match code {
        223 => 138, // ß
        196 => 133, // Ä
        214 => 135, // Ö
        220 => 137, // Ü
        228 => 132, // ä
        246 => 134, // ö
        252 => 136, // ü
        other => other,
    }
}

/// Display memory, window and scroll state
///
/// `N` is the display memory size in columns and must not exceed 256: the
/// window base is an 8-bit offset.
#[derive(Debug, Clone)]
pub struct Display<const N: usize> {
    memory: [u8; N],
    base: u8,
    current_column: u8,
    cursor: usize,
    geometry: Geometry,
    scroll: ScrollConfig,
    strategy: ScrollStrategy,
    truncated: bool,
}

impl<const N: usize> Display<N> {
    /// Create an empty display with text scrolling
    pub fn new(geometry: Geometry) -> Self {
        Self::with_strategy(geometry, ScrollStrategy::Text)
    }

    /// Create an empty display with the given scroll strategy
    pub fn with_strategy(geometry: Geometry, strategy: ScrollStrategy) -> Self {
        let geometry = Geometry {
            columns: geometry.columns.clamp(1, MAX_MATRIX_SIDE),
            rows: geometry.rows.clamp(1, MAX_MATRIX_SIDE),
        };
        Self {
            memory: [0; N],
            base: 0,
            current_column: 0,
            cursor: 0,
            geometry,
            scroll: ScrollConfig::default(),
            strategy,
            truncated: false,
        }
    }

    /// Create an empty display as configured
    pub fn from_config(config: &DisplayConfig) -> Self {
        let strategy = match config.strategy {
            StrategyKind::Text => ScrollStrategy::Text,
            StrategyKind::Life => ScrollStrategy::Life(Life::new(config.life_seed)),
        };
        Self::with_strategy(config.geometry, strategy)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// First free column
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible column
    pub fn base(&self) -> usize {
        usize::from(self.base)
    }

    pub fn scroll_config(&self) -> &ScrollConfig {
        &self.scroll
    }

    /// True if an append was dropped since the last `clear`
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Column byte at `index`; columns past the end of memory read blank
    pub fn column(&self, index: usize) -> u8 {
        self.memory.get(index).copied().unwrap_or(0)
    }

    /// Column byte at window position `column`
    pub fn visible(&self, column: u8) -> u8 {
        self.column(self.base() + usize::from(column))
    }

    /// Rewind base and cursor and blank the visible window
    ///
    /// Memory past the window keeps its old content; it is overwritten by
    /// the next appends before the cursor can expose it.
    pub fn clear(&mut self) {
        self.base = 0;
        self.cursor = 0;
        self.truncated = false;
        let width = usize::from(self.geometry.columns).min(N);
        self.memory[..width].fill(0);
    }

    /// Write one column at the cursor
    pub fn append_raw(&mut self, byte: u8) {
        match self.memory.get_mut(self.cursor) {
            Some(slot) => {
                *slot = byte;
                self.cursor += 1;
            }
            None => self.truncated = true,
        }
    }

    /// Draw one character from the font
    ///
    /// Codes without a font entry are skipped.
    pub fn append_glyph<R: Resources + ?Sized>(&mut self, code: u8, resources: &R) {
        let index = remap_glyph(code).wrapping_sub(FONT_OFFSET);
        let Some(columns) = resources.glyph(index) else {
            return;
        };
        for &column in columns.iter().take(CHAR_WIDTH) {
            if column & GLYPH_END != 0 {
                break;
            }
            self.append_raw(column);
        }
    }

    /// Copy image columns up to the end-of-data marker
    pub fn append_image(&mut self, image: &[u8]) {
        for &column in image.iter().take_while(|&&c| c != END_OF_DATA) {
            self.append_raw(column);
        }
    }

    /// Apply scroll parameters for the next message
    pub fn configure_scroll(&mut self, increment: u8, direction: ScrollDirection, delay: u8) {
        self.scroll = ScrollConfig::new(increment, direction, delay);
    }

    /// Advance to the next window column
    ///
    /// Called from the fast tick; does no more than an index update and a
    /// memory read.
    pub fn refresh_step(&mut self) -> ColumnFrame {
        self.current_column = (self.current_column + 1) % self.geometry.columns;
        ColumnFrame {
            column: self.current_column,
            pattern: self.visible(self.current_column),
        }
    }

    /// One scroll step of the active strategy
    pub fn scroll_step(&mut self) -> ScrollEvent {
        match &mut self.strategy {
            ScrollStrategy::Text => scroll::text_step(
                &mut self.scroll,
                &mut self.base,
                self.cursor,
                self.geometry.columns,
            ),
            ScrollStrategy::Life(life) => {
                let start = usize::from(self.base).min(N);
                let end = (start + usize::from(self.geometry.columns)).min(N);
                life.step(&mut self.memory[start..end], self.geometry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::resources;
    use proptest::prelude::*;

    fn display() -> Display<32> {
        Display::new(Geometry::default())
    }

    #[test]
    fn test_hi_width() {
        let res = resources();
        let mut d = display();
        d.append_glyph(b'H', &res);
        d.append_raw(0);
        d.append_glyph(b'i', &res);
        assert_eq!(d.cursor(), 5 + 1 + 1);
        assert_eq!(d.column(5), 0);
        assert_eq!(d.column(6), 0x7D);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let res = resources();
        let mut d = display();
        d.append_glyph(b'H', &res);
        d.scroll_step();

        d.clear();
        let once = (d.base(), d.cursor(), [d.visible(0), d.visible(4)]);
        d.clear();
        let twice = (d.base(), d.cursor(), [d.visible(0), d.visible(4)]);
        assert_eq!(once, twice);
        assert_eq!(once, (0, 0, [0, 0]));
    }

    #[test]
    fn test_append_raw_at_capacity() {
        let mut d = Display::<4>::new(Geometry::default());
        for byte in 1..=4 {
            d.append_raw(byte);
        }
        assert!(!d.truncated());

        d.append_raw(9);
        assert_eq!(d.cursor(), 4);
        assert_eq!(d.column(3), 4);
        assert!(d.truncated());

        d.clear();
        assert!(!d.truncated());
    }

    #[test]
    fn test_glyph_remap_and_rejection() {
        let res = resources();
        let mut d = display();

        d.append_glyph(228, &res); // ä -> slot 132
        assert_eq!(d.column(0), 132 & 0x7F);
        assert_eq!(d.cursor(), 1);

        // Below the font offset and past the end of the table
        d.append_glyph(0x10, &res);
        d.append_glyph(200, &res);
        assert_eq!(d.cursor(), 1);
    }

    #[test]
    fn test_append_image_stops_at_marker() {
        let mut d = display();
        d.append_image(&[0x01, 0x02, 0xFF, 0x03]);
        assert_eq!(d.cursor(), 2);
        d.append_image(&[0x04]);
        assert_eq!(d.cursor(), 3);
    }

    #[test]
    fn test_refresh_cycles_window() {
        let mut d = display();
        d.append_image(&[0x10, 0x11, 0x12, 0x13, 0x14, 0x15]);

        let columns: Vec<u8> = (0..6).map(|_| d.refresh_step().column).collect();
        assert_eq!(columns, [1, 2, 3, 4, 0, 1]);

        d.configure_scroll(1, ScrollDirection::Forward, 0);
        assert_eq!(d.scroll_step(), ScrollEvent::Advanced);
        let frame = d.refresh_step();
        assert_eq!(frame, ColumnFrame { column: 2, pattern: 0x13 });
    }

    #[test]
    fn test_refresh_past_memory_is_blank() {
        // Memory narrower than the window
        let mut d = Display::<3>::new(Geometry::default());
        d.append_image(&[0x7F; 3]);

        let patterns: Vec<u8> = (0..5).map(|_| d.refresh_step().pattern).collect();
        assert_eq!(patterns, [0x7F, 0x7F, 0x00, 0x00, 0x7F]);
    }

    #[test]
    fn test_life_strategy_runs_on_window() {
        let geometry = Geometry::default();
        let mut d = Display::<32>::with_strategy(geometry, ScrollStrategy::Life(Life::new(3)));
        d.append_image(&[0x00, 0x00, 0x1C, 0x00, 0x00, 0x7F]);

        assert_eq!(d.scroll_step(), ScrollEvent::Evolved);
        assert_eq!(d.base(), 0);
        assert_eq!(
            [d.visible(0), d.visible(1), d.visible(2), d.visible(3), d.visible(4)],
            [0x00, 0x08, 0x08, 0x08, 0x00]
        );
        // Outside the window untouched
        assert_eq!(d.column(5), 0x7F);
    }

    #[test]
    fn test_from_config_selects_strategy() {
        let config = DisplayConfig {
            strategy: StrategyKind::Life,
            ..Default::default()
        };
        let mut d = Display::<32>::from_config(&config);
        // An empty window is stable and gets reseeded
        let events: Vec<ScrollEvent> = (0..STABLE_LIMIT).map(|_| d.scroll_step()).collect();
        assert_eq!(events.last(), Some(&ScrollEvent::Reseeded));

        let mut d = Display::<32>::from_config(&DisplayConfig::default());
        assert_eq!(d.scroll_step(), ScrollEvent::Boundary);
    }

    proptest! {
        #[test]
        fn prop_cursor_within_capacity(bytes in proptest::collection::vec(any::<u8>(), 0..80)) {
            let res = resources();
            let mut d = Display::<40>::new(Geometry::default());
            for byte in bytes {
                d.append_glyph(byte, &res);
                d.append_raw(byte);
                prop_assert!(d.cursor() <= 40);
            }
        }

        #[test]
        fn prop_refresh_stays_in_window(steps in 1usize..50, columns in 1u8..=8) {
            let mut d = Display::<16>::new(Geometry { columns, rows: 7 });
            for _ in 0..steps {
                prop_assert!(d.refresh_step().column < columns);
            }
        }
    }
}
