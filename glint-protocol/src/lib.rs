//! Glint message protocol
//!
//! This crate defines everything that crosses the serial line or sits in
//! the persistent message store. It has no notion of LEDs or timing.
//!
//! # Store layout
//!
//! The store is a contiguous run of records:
//! ```text
//! ┌──────┬──────────────────────┬──────┐ ┌──────┬─────  ─┐ ┌──────┐
//! │ MODE │ escaped payload ...  │ 0x00 │ │ MODE │ ...    │ │ 0x00 │
//! │ 1B   │ 0..n bytes           │ 1B   │ │      │        │ │ end  │
//! └──────┴──────────────────────┴──────┘ └──────┴─────  ─┘ └──────┘
//! ```
//! A mode byte of `0x00` marks the end of the playlist; playback then
//! restarts at offset 0.
//!
//! # Serial upload
//!
//! Bytes arrive one at a time. The session only accepts data after the
//! `'H'`,`'L'` handshake, and `ESC` (27) resets it from any state. See
//! [`session`] for the full transition table.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod mode;
pub mod payload;
pub mod session;
pub mod upload;

pub use mode::{ModeByte, ScrollDirection, ScrollSettings, DELAY_TABLE, SPEED_TABLE};
pub use payload::{PayloadReader, Unit};
pub use session::{Feed, SerialSession, SessionConfig, SessionError, SessionState, ESC};
pub use upload::{UploadBuilder, UploadError};

/// Record terminator and end-of-playlist mode byte
pub const TERMINATOR: u8 = 0x00;
