//! Device configuration
//!
//! Build-time settings for one pendant: matrix geometry and wiring, tick
//! rates, button timing and the sleep/wake behavior. Defaults describe the
//! reference board (5x7 common cathode matrix, 1 kHz column refresh,
//! 100 Hz system tick).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glint_protocol::SessionConfig;

/// Column refresh frequency (Hz)
pub const COLUMN_FREQ_HZ: u32 = 1000;

/// System tick frequency (Hz)
pub const SYSTEM_TICK_HZ: u32 = 100;

/// System ticks a press must be held before it counts as a long press
pub const LONGPRESS_TICKS: u8 = 100;

/// Store bytes reserved for the playlist, mirrored from one flash page
pub const STORE_SIZE: usize = 256;

/// Display memory size in columns
pub const DISP_MAX: usize = 200;

/// Maximum glyph width in columns
pub const CHAR_WIDTH: usize = 5;

/// Largest supported matrix side
pub const MAX_MATRIX_SIDE: u8 = 8;

/// Slow ticks between scroll steps before the first message sets a speed
pub const INITIAL_SCROLL_SPEED: u8 = 14;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Rows or columns outside 1..=8
    InvalidGeometry,
    /// A tick frequency is zero
    ZeroFrequency,
    /// The system tick is faster than the column refresh
    TickOrder,
}

/// Matrix dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    /// Visible columns (window width)
    pub columns: u8,
    /// Rows per column (bits used per display byte)
    pub rows: u8,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { columns: 5, rows: 7 }
    }
}

impl Geometry {
    /// Bit mask covering all rows
    pub fn row_mask(&self) -> u8 {
        ((1u16 << self.rows.min(MAX_MATRIX_SIDE)) - 1) as u8
    }
}

/// Matrix wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wiring {
    /// Column lines sink current; active column driven low
    #[default]
    CommonCathode,
    /// Column lines source current; every output inverted
    CommonAnode,
}

/// Scroll strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrategyKind {
    /// Scroll display memory through the window
    #[default]
    Text,
    /// Run Life on the visible window
    Life,
}

/// Playlist position after waking up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResumeMode {
    /// Keep the read cursor
    #[default]
    Continue,
    /// Rewind to the first message
    Restart,
}

/// Display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub geometry: Geometry,
    pub wiring: Wiring,
    /// Matrix mounted rotated by 180 degrees
    pub upside_down: bool,
    pub strategy: StrategyKind,
    /// Seed for the Life reseed generator (0 is replaced by a fixed seed)
    pub life_seed: u32,
    /// Glyph shown after a serial reset
    pub logo_glyph: Option<u8>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            wiring: Wiring::CommonCathode,
            upside_down: false,
            strategy: StrategyKind::Text,
            life_seed: 0x2545_F491,
            logo_glyph: Some(128),
        }
    }
}

/// Tick and button timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    pub column_freq_hz: u32,
    pub system_tick_hz: u32,
    pub longpress_ticks: u8,
    pub initial_scroll_speed: u8,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            column_freq_hz: COLUMN_FREQ_HZ,
            system_tick_hz: SYSTEM_TICK_HZ,
            longpress_ticks: LONGPRESS_TICKS,
            initial_scroll_speed: INITIAL_SCROLL_SPEED,
        }
    }
}

impl TimingConfig {
    /// Fast tick period in microseconds
    pub fn column_period_us(&self) -> u64 {
        1_000_000 / u64::from(self.column_freq_hz.max(1))
    }

    /// Slow tick period in microseconds
    pub fn system_period_us(&self) -> u64 {
        1_000_000 / u64::from(self.system_tick_hz.max(1))
    }
}

/// Sleep and wake behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerConfig {
    /// Glyph shown while the display blanks before sleeping
    pub sleep_glyph: Option<u8>,
    /// Glyph shown right after waking up
    pub wake_glyph: Option<u8>,
    /// Wait before power-down (ms)
    pub blank_delay_ms: u32,
    /// Wait after waking before scrolling resumes (ms)
    pub wake_delay_ms: u32,
    pub resume: ResumeMode,
    /// Enter sleep right after power-on
    pub start_asleep: bool,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            sleep_glyph: None,
            wake_glyph: Some(128),
            blank_delay_ms: 1000,
            wake_delay_ms: 500,
            resume: ResumeMode::Continue,
            start_asleep: true,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    pub display: DisplayConfig,
    pub timing: TimingConfig,
    pub power: PowerConfig,
    /// Accept live display sessions on the serial link
    pub live_display: bool,
}

impl DeviceConfig {
    /// Check the configuration for values the firmware cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let geometry = self.display.geometry;
        if !(1..=MAX_MATRIX_SIDE).contains(&geometry.columns)
            || !(1..=MAX_MATRIX_SIDE).contains(&geometry.rows)
        {
            return Err(ConfigError::InvalidGeometry);
        }

        if self.timing.column_freq_hz == 0 || self.timing.system_tick_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }

        if self.timing.system_tick_hz > self.timing.column_freq_hz {
            return Err(ConfigError::TickOrder);
        }

        Ok(())
    }

    /// Serial session options
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            live_display: self.live_display,
        }
    }
}
