//! Font and animation tables
//!
//! The bitmaps themselves are static data supplied by the firmware. A glyph
//! is up to [`CHAR_WIDTH`](crate::config::CHAR_WIDTH) column bytes; a column
//! with bit 7 set ends a narrow glyph early. An animation is a run of column
//! bytes closed by `0xFF`.

/// First character code present in the font table
pub const FONT_OFFSET: u8 = 32;

/// End-of-data marker for animations
pub const END_OF_DATA: u8 = 0xFF;

/// Read-only display resources
pub trait Resources {
    /// Columns of the font entry at `index` (character code minus 32)
    fn glyph(&self, index: u8) -> Option<&[u8]>;

    /// Column data of animation `index`, usually closed by `0xFF`
    fn animation(&self, index: u8) -> Option<&[u8]>;
}

/// Resources backed by static tables
#[derive(Debug, Clone, Copy)]
pub struct StaticResources<'a, const W: usize> {
    font: &'a [[u8; W]],
    animations: &'a [&'a [u8]],
}

impl<'a, const W: usize> StaticResources<'a, W> {
    pub const fn new(font: &'a [[u8; W]], animations: &'a [&'a [u8]]) -> Self {
        Self { font, animations }
    }
}

impl<const W: usize> Resources for StaticResources<'_, W> {
    fn glyph(&self, index: u8) -> Option<&[u8]> {
        self.font.get(usize::from(index)).map(|g| g.as_slice())
    }

    fn animation(&self, index: u8) -> Option<&[u8]> {
        self.animations.get(usize::from(index)).copied()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Small tables used by the unit tests

    use super::StaticResources;

    const BLANK: [u8; 5] = [0x80; 5];

    /// Font covering codes 32..=138
    ///
    /// `'H'` is 5 columns wide, `'i'` 1 column, `'^'` 3 columns; the
    /// extended codes carry their own code in the first column so tests
    /// can tell them apart.
    pub static FONT: [[u8; 5]; 107] = {
        let mut font = [BLANK; 107];
        font[(b' ' - 32) as usize] = [0x00, 0x00, 0x80, 0x80, 0x80];
        font[(b'A' - 32) as usize] = [0x7E, 0x11, 0x11, 0x11, 0x7E];
        font[(b'H' - 32) as usize] = [0x7F, 0x08, 0x08, 0x08, 0x7F];
        font[(b'i' - 32) as usize] = [0x7D, 0x80, 0x80, 0x80, 0x80];
        font[(b'^' - 32) as usize] = [0x02, 0x01, 0x02, 0x80, 0x80];
        let mut code = 128;
        while code <= 138 {
            font[code - 32] = [code as u8 & 0x7F, 0x80, 0x80, 0x80, 0x80];
            code += 1;
        }
        font
    };

    static ARROW: [u8; 4] = [0x08, 0x1C, 0x3E, 0xFF];
    static BLOCK: [u8; 3] = [0x7F, 0x7F, 0xFF];

    pub static ANIMATIONS: [&[u8]; 2] = [&ARROW, &BLOCK];

    pub fn resources() -> StaticResources<'static, 5> {
        StaticResources::new(&FONT, &ANIMATIONS)
    }
}
