//! 5x7 proportional font
//!
//! One entry per character code starting at 32. Each column byte has bit 0
//! at the top row. Glyphs are stored at full width and narrowed at compile
//! time: leading blank columns are dropped and a `0x80` stop column ends
//! the glyph after its last lit column.
//!
//! Codes 128..=138 hold the extended glyphs: the logo, a few symbols and
//! the German umlauts the display remaps Latin-1 input onto.

/// Full-width glyph to proportional entry
const fn narrow(columns: [u8; 5]) -> [u8; 5] {
    let mut first = 0;
    while first < 5 && columns[first] == 0 {
        first += 1;
    }
    // Blank glyph: keep two columns of space
    if first == 5 {
        return [0x00, 0x00, 0x80, 0x80, 0x80];
    }
    let mut last = 4;
    while columns[last] == 0 {
        last -= 1;
    }

    let mut out = [0x80; 5];
    let mut i = 0;
    while first + i <= last {
        out[i] = columns[first + i];
        i += 1;
    }
    out
}

/// Number of font entries (codes 32..=138)
pub const GLYPH_COUNT: usize = 107;

pub static FONT: [[u8; 5]; GLYPH_COUNT] = [
    narrow([0x00, 0x00, 0x00, 0x00, 0x00]), // ' '
    narrow([0x00, 0x00, 0x5F, 0x00, 0x00]), // !
    narrow([0x00, 0x07, 0x00, 0x07, 0x00]), // "
    narrow([0x14, 0x7F, 0x14, 0x7F, 0x14]), // #
    narrow([0x24, 0x2A, 0x7F, 0x2A, 0x12]), // $
    narrow([0x23, 0x13, 0x08, 0x64, 0x62]), // %
    narrow([0x36, 0x49, 0x55, 0x22, 0x50]), // &
    narrow([0x00, 0x05, 0x03, 0x00, 0x00]), // '
    narrow([0x00, 0x1C, 0x22, 0x41, 0x00]), // (
    narrow([0x00, 0x41, 0x22, 0x1C, 0x00]), // )
    narrow([0x08, 0x2A, 0x1C, 0x2A, 0x08]), // *
    narrow([0x08, 0x08, 0x3E, 0x08, 0x08]), // +
    narrow([0x00, 0x50, 0x30, 0x00, 0x00]), // ,
    narrow([0x08, 0x08, 0x08, 0x08, 0x08]), // -
    narrow([0x00, 0x60, 0x60, 0x00, 0x00]), // .
    narrow([0x20, 0x10, 0x08, 0x04, 0x02]), // /
    narrow([0x3E, 0x51, 0x49, 0x45, 0x3E]), // 0
    narrow([0x00, 0x42, 0x7F, 0x40, 0x00]), // 1
    narrow([0x42, 0x61, 0x51, 0x49, 0x46]), // 2
    narrow([0x21, 0x41, 0x45, 0x4B, 0x31]), // 3
    narrow([0x18, 0x14, 0x12, 0x7F, 0x10]), // 4
    narrow([0x27, 0x45, 0x45, 0x45, 0x39]), // 5
    narrow([0x3C, 0x4A, 0x49, 0x49, 0x30]), // 6
    narrow([0x01, 0x71, 0x09, 0x05, 0x03]), // 7
    narrow([0x36, 0x49, 0x49, 0x49, 0x36]), // 8
    narrow([0x06, 0x49, 0x49, 0x29, 0x1E]), // 9
    narrow([0x00, 0x36, 0x36, 0x00, 0x00]), // :
    narrow([0x00, 0x56, 0x36, 0x00, 0x00]), // ;
    narrow([0x08, 0x14, 0x22, 0x41, 0x00]), // <
    narrow([0x14, 0x14, 0x14, 0x14, 0x14]), // =
    narrow([0x00, 0x41, 0x22, 0x14, 0x08]), // >
    narrow([0x02, 0x01, 0x51, 0x09, 0x06]), // ?
    narrow([0x32, 0x49, 0x79, 0x41, 0x3E]), // @
    narrow([0x7E, 0x11, 0x11, 0x11, 0x7E]), // A
    narrow([0x7F, 0x49, 0x49, 0x49, 0x36]), // B
    narrow([0x3E, 0x41, 0x41, 0x41, 0x22]), // C
    narrow([0x7F, 0x41, 0x41, 0x22, 0x1C]), // D
    narrow([0x7F, 0x49, 0x49, 0x49, 0x41]), // E
    narrow([0x7F, 0x09, 0x09, 0x01, 0x01]), // F
    narrow([0x3E, 0x41, 0x41, 0x51, 0x32]), // G
    narrow([0x7F, 0x08, 0x08, 0x08, 0x7F]), // H
    narrow([0x00, 0x41, 0x7F, 0x41, 0x00]), // I
    narrow([0x20, 0x40, 0x41, 0x3F, 0x01]), // J
    narrow([0x7F, 0x08, 0x14, 0x22, 0x41]), // K
    narrow([0x7F, 0x40, 0x40, 0x40, 0x40]), // L
    narrow([0x7F, 0x02, 0x04, 0x02, 0x7F]), // M
    narrow([0x7F, 0x04, 0x08, 0x10, 0x7F]), // N
    narrow([0x3E, 0x41, 0x41, 0x41, 0x3E]), // O
    narrow([0x7F, 0x09, 0x09, 0x09, 0x06]), // P
    narrow([0x3E, 0x41, 0x51, 0x21, 0x5E]), // Q
    narrow([0x7F, 0x09, 0x19, 0x29, 0x46]), // R
    narrow([0x46, 0x49, 0x49, 0x49, 0x31]), // S
    narrow([0x01, 0x01, 0x7F, 0x01, 0x01]), // T
    narrow([0x3F, 0x40, 0x40, 0x40, 0x3F]), // U
    narrow([0x1F, 0x20, 0x40, 0x20, 0x1F]), // V
    narrow([0x7F, 0x20, 0x18, 0x20, 0x7F]), // W
    narrow([0x63, 0x14, 0x08, 0x14, 0x63]), // X
    narrow([0x03, 0x04, 0x78, 0x04, 0x03]), // Y
    narrow([0x61, 0x51, 0x49, 0x45, 0x43]), // Z
    narrow([0x00, 0x7F, 0x41, 0x41, 0x00]), // [
    narrow([0x02, 0x04, 0x08, 0x10, 0x20]), // backslash
    narrow([0x00, 0x41, 0x41, 0x7F, 0x00]), // ]
    narrow([0x04, 0x02, 0x01, 0x02, 0x04]), // ^
    narrow([0x40, 0x40, 0x40, 0x40, 0x40]), // _
    narrow([0x00, 0x01, 0x02, 0x04, 0x00]), // `
    narrow([0x20, 0x54, 0x54, 0x54, 0x78]), // a
    narrow([0x7F, 0x48, 0x44, 0x44, 0x38]), // b
    narrow([0x38, 0x44, 0x44, 0x44, 0x20]), // c
    narrow([0x38, 0x44, 0x44, 0x48, 0x7F]), // d
    narrow([0x38, 0x54, 0x54, 0x54, 0x18]), // e
    narrow([0x08, 0x7E, 0x09, 0x01, 0x02]), // f
    narrow([0x08, 0x14, 0x54, 0x54, 0x3C]), // g
    narrow([0x7F, 0x08, 0x04, 0x04, 0x78]), // h
    narrow([0x00, 0x44, 0x7D, 0x40, 0x00]), // i
    narrow([0x20, 0x40, 0x44, 0x3D, 0x00]), // j
    narrow([0x00, 0x7F, 0x10, 0x28, 0x44]), // k
    narrow([0x00, 0x41, 0x7F, 0x40, 0x00]), // l
    narrow([0x7C, 0x04, 0x18, 0x04, 0x78]), // m
    narrow([0x7C, 0x08, 0x04, 0x04, 0x78]), // n
    narrow([0x38, 0x44, 0x44, 0x44, 0x38]), // o
    narrow([0x7C, 0x14, 0x14, 0x14, 0x08]), // p
    narrow([0x08, 0x14, 0x14, 0x18, 0x7C]), // q
    narrow([0x7C, 0x08, 0x04, 0x04, 0x08]), // r
    narrow([0x48, 0x54, 0x54, 0x54, 0x20]), // s
    narrow([0x04, 0x3F, 0x44, 0x40, 0x20]), // t
    narrow([0x3C, 0x40, 0x40, 0x20, 0x7C]), // u
    narrow([0x1C, 0x20, 0x40, 0x20, 0x1C]), // v
    narrow([0x3C, 0x40, 0x30, 0x40, 0x3C]), // w
    narrow([0x44, 0x28, 0x10, 0x28, 0x44]), // x
    narrow([0x0C, 0x50, 0x50, 0x50, 0x3C]), // y
    narrow([0x44, 0x64, 0x54, 0x4C, 0x44]), // z
    narrow([0x00, 0x08, 0x36, 0x41, 0x00]), // {
    narrow([0x00, 0x00, 0x7F, 0x00, 0x00]), // |
    narrow([0x00, 0x41, 0x36, 0x08, 0x00]), // }
    narrow([0x08, 0x04, 0x08, 0x10, 0x08]), // ~
    narrow([0x08, 0x1C, 0x2A, 0x08, 0x08]), // DEL: left arrow
    narrow([0x0C, 0x1E, 0x3C, 0x1E, 0x0C]), // 128: logo (heart)
    narrow([0x10, 0x22, 0x20, 0x22, 0x10]), // 129: smiley
    narrow([0x06, 0x09, 0x09, 0x06, 0x00]), // 130: degree
    narrow([0x60, 0x60, 0x3F, 0x02, 0x0C]), // 131: note
    narrow([0x20, 0x55, 0x54, 0x55, 0x78]), // 132: ä
    narrow([0x7D, 0x12, 0x11, 0x12, 0x7D]), // 133: Ä
    narrow([0x38, 0x45, 0x44, 0x45, 0x38]), // 134: ö
    narrow([0x3D, 0x42, 0x42, 0x42, 0x3D]), // 135: Ö
    narrow([0x3C, 0x41, 0x40, 0x21, 0x7C]), // 136: ü
    narrow([0x3D, 0x40, 0x40, 0x40, 0x3D]), // 137: Ü
    narrow([0x7E, 0x01, 0x49, 0x56, 0x20]), // 138: ß
];
