//! STM32F0-specific HAL for the Glint firmware
//!
//! Implements the `glint-hal` traits on top of embassy-stm32:
//!
//! - [`gpio`] - Matrix output lines and the button input
//! - [`flash`] - The message store, mirrored in RAM and persisted to the
//!   last flash page (the F0 has no EEPROM)
//! - [`power`] - STOP mode with an EXTI wake on the button line
//! - [`uart`] - Serial configuration and error conversion
//!
//! # Features
//!
//! - `stm32f042f6` - STM32F042F6P6 (TSSOP20 pendant board)
//! - `stm32f042k6` - STM32F042K6 (LQFP32 development board)
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod flash;
pub mod gpio;
pub mod power;
pub mod uart;

pub use flash::{FlashError, FlashStore};
pub use gpio::{ButtonPin, LinePin};
pub use power::StopWake;
pub use uart::{usart_config, UartBusError};
