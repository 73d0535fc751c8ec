//! Board-agnostic core logic for the Glint pendant firmware
//!
//! This crate contains everything between the hardware traits and the
//! firmware tasks:
//!
//! - Display engine with text scrolling and the Life screensaver
//! - Matrix output mapping for column multiplexing
//! - Message renderer reading the playlist from the byte store
//! - Button event state machine
//! - Tick handlers, power manager and the main-loop controller
//! - Configuration type definitions
//!
//! # Execution model
//!
//! ```text
//!  fast tick ──► refresh ──► MatrixDriver ──► row/column pins
//!                  ▲
//!                  │ reads window
//!  slow tick ──► SlowTick ──► Display::scroll_step
//!                  │
//!                  └──► ButtonSampler ──► SharedButton ──► Controller
//!                                                            │
//!  receive ──► SerialSession ──► ByteStore ◄── Renderer ◄────┤
//!                                                            ▼
//!                                                      PowerManager
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod button;
pub mod config;
pub mod controller;
pub mod display;
pub mod matrix;
pub mod power;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod shared;

pub use button::{ButtonEvent, ButtonSampler, SharedButton};
pub use config::{ConfigError, DeviceConfig, Geometry, ResumeMode, StrategyKind, Wiring};
pub use controller::Controller;
pub use display::{ColumnFrame, Display, Life, ScrollEvent, ScrollStrategy};
pub use matrix::MatrixDriver;
pub use power::PowerManager;
pub use render::{RenderError, Rendered, Renderer};
pub use resources::{Resources, StaticResources};
pub use scheduler::{fast_tick, Playback, RefreshSwitch, SlowTick};
pub use shared::Shared;
