//! Glint Pendant Firmware
//!
//! Firmware for the STM32F042 LED dot-matrix pendant. A playlist of
//! scrolling messages is uploaded over the serial line; the push-button
//! steps through it and puts the pendant to sleep.
//!
//! # Tasks
//!
//! - refresh: fast tick, one matrix column per millisecond
//! - system tick: scrolling and button sampling every 10 ms
//! - serial RX: upload session and live display
//! - store: writes the playlist back to flash once uploads go quiet
//! - main: button events, rendering, sleep/wake

#![no_std]
#![no_main]

mod animations;
mod board;
mod channels;
mod config;
mod font;
mod shared;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glint_core::resources::StaticResources;
use glint_core::{Controller, Display, MatrixDriver, PowerManager};
use glint_hal::WakeSource;
use glint_hal_stm32f0::{FlashStore, StopWake};

use crate::animations::ANIMATIONS;
use crate::board::{Board, BUTTON_LINE};
use crate::channels::{SharedDisplay, SharedStore, BUTTON, BUTTON_EVENT, PLAYBACK};
use crate::config::{device_config, uart_config};
use crate::font::FONT;
use crate::shared::Locked;
use crate::tasks::persist;

/// Font and animation tables
pub static RESOURCES: StaticResources<'static, 5> = StaticResources::new(&FONT, &ANIMATIONS);

// Shared state built at startup (must live forever for task references)
static DISPLAY: StaticCell<SharedDisplay> = StaticCell::new();
static STORE: StaticCell<SharedStore> = StaticCell::new();

/// STOP-mode wake that saves pending store writes first
struct PendantWake {
    stop: StopWake,
    store: &'static SharedStore,
}

impl WakeSource for PendantWake {
    fn arm(&mut self) {
        persist(self.store);
        self.stop.arm();
    }

    fn power_down(&mut self) {
        self.stop.power_down();
    }

    fn disarm(&mut self) {
        self.stop.disarm();
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glint firmware starting...");

    let config = device_config();
    if let Err(e) = config.validate() {
        defmt::panic!("Invalid device configuration: {:?}", e);
    }

    let p = embassy_stm32::init(Default::default());
    let cp = unwrap!(cortex_m::Peripherals::take());
    let board = Board::new(p, &uart_config());
    info!("Peripherals initialized");

    let store = match FlashStore::new(board.flash) {
        Ok(store) => store,
        Err(e) => defmt::panic!("Flash read failed: {:?}", e),
    };
    let store: &'static SharedStore = STORE.init(Locked::new(store));
    let display: &'static SharedDisplay =
        DISPLAY.init(Locked::new(Display::from_config(&config.display)));

    let matrix = MatrixDriver::new(
        board.rows,
        board.columns,
        config.display.wiring,
        config.display.upside_down,
    );
    PLAYBACK.set_scroll_speed(config.timing.initial_scroll_speed);

    // Spawn tasks
    spawner
        .spawn(tasks::refresh_task(
            display,
            matrix,
            config.timing.column_period_us(),
        ))
        .unwrap();
    spawner
        .spawn(tasks::system_tick_task(
            display,
            board.button,
            config.timing.longpress_ticks,
            config.timing.system_period_us(),
        ))
        .unwrap();
    spawner
        .spawn(tasks::serial_rx_task(
            board.serial,
            store,
            display,
            config.session(),
            config.display.logo_glyph,
        ))
        .unwrap();
    spawner.spawn(tasks::store_task(store)).unwrap();

    info!("All tasks spawned");

    let wake = PendantWake {
        stop: StopWake::new(cp.SCB, BUTTON_LINE),
        store,
    };
    let mut power = PowerManager::new(wake, Delay, config.power);
    let controller = Controller::new(&RESOURCES, &PLAYBACK, &BUTTON, config.display.logo_glyph);

    controller.start(store, display, &mut power).await;

    loop {
        BUTTON_EVENT.wait().await;
        if let Some(event) = controller.poll(store, display, &mut power).await {
            debug!("Button: {:?}", event);
        }
    }
}
