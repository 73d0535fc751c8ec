//! Built-in animations
//!
//! Each animation is a run of column bytes closed by `0xFF`. Frames are as
//! wide as the matrix, so a message mode with a 5-column increment plays
//! them frame by frame.

use glint_core::resources::END_OF_DATA;

const E: u8 = END_OF_DATA;

/// Arrow sliding across the window
static ARROW: [u8; 16] = [
    0x08, 0x08, 0x2A, 0x1C, 0x08, //
    0x00, 0x08, 0x08, 0x2A, 0x1C, //
    0x1C, 0x08, 0x08, 0x08, 0x2A, //
    E,
];

/// Ball bouncing between floor and ceiling
static BOUNCE: [u8; 31] = [
    0x01, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x02, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x04, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x08, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x10, //
    0x00, 0x00, 0x00, 0x20, 0x00, //
    E,
];

/// Alternating checkerboard
static CHECKERS: [u8; 11] = [
    0x55, 0x2A, 0x55, 0x2A, 0x55, //
    0x2A, 0x55, 0x2A, 0x55, 0x2A, //
    E,
];

/// Heartbeat trace
static ECG: [u8; 21] = [
    0x08, 0x08, 0x08, 0x08, 0x08, //
    0x08, 0x04, 0x7F, 0x20, 0x08, //
    0x08, 0x08, 0x04, 0x02, 0x04, //
    0x08, 0x08, 0x08, 0x08, 0x08, //
    E,
];

/// Face that winks
static WINK: [u8; 16] = [
    0x10, 0x26, 0x20, 0x26, 0x10, //
    0x10, 0x24, 0x20, 0x26, 0x10, //
    0x10, 0x26, 0x20, 0x26, 0x10, //
    E,
];

/// Frame shrinking towards the center
static TUNNEL: [u8; 16] = [
    0x7F, 0x41, 0x41, 0x41, 0x7F, //
    0x00, 0x3E, 0x22, 0x3E, 0x00, //
    0x00, 0x00, 0x1C, 0x00, 0x00, //
    E,
];

/// Animation table, indexed by the byte after `~` minus `'A'`
pub static ANIMATIONS: [&[u8]; 6] = [&ARROW, &BOUNCE, &CHECKERS, &ECG, &WINK, &TUNNEL];
