//! Build-time device configuration
//!
//! Defaults describe the reference pendant; Cargo features select board
//! variants.

use glint_core::config::{DeviceConfig, StrategyKind, Wiring};
use glint_hal::UartConfig;

/// Device configuration for this build
pub fn device_config() -> DeviceConfig {
    let mut config = DeviceConfig::default();

    if cfg!(feature = "common-anode") {
        config.display.wiring = Wiring::CommonAnode;
    }
    config.display.upside_down = cfg!(feature = "upside-down");
    if cfg!(feature = "life") {
        config.display.strategy = StrategyKind::Life;
    }
    config.power.start_asleep = !cfg!(feature = "start-awake");
    config.live_display = cfg!(feature = "live-display");

    config
}

/// Serial link settings (2400 8N1)
pub fn uart_config() -> UartConfig {
    UartConfig::default()
}
