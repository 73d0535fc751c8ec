//! Glint Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the pendant logic is written
//! against. Chip-specific crates (STM32F0 today) implement them, and the
//! host test suites implement them with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  glint-firmware (tasks, tables, board)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glint-core / glint-protocol            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glint-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  glint-hal-   │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O for the matrix and button
//! - [`store::ByteStore`] - Byte-addressable persistent message store
//! - [`tick::RefreshGate`] - Suspending the column refresh tick
//! - [`power::WakeSource`] - Power-down sleep with a pin-change wake

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod power;
pub mod store;
pub mod tick;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use power::WakeSource;
pub use store::{ByteStore, MemoryStore, StoreError};
pub use tick::RefreshGate;
pub use uart::UartConfig;
