//! Inter-task state
//!
//! The button byte and playback flags are atomics shared with the ticks;
//! signals wake the tasks that react to them.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use glint_core::config::{DISP_MAX, INITIAL_SCROLL_SPEED, STORE_SIZE};
use glint_core::{Display, Playback, RefreshSwitch, SharedButton};
use glint_hal_stm32f0::FlashStore;

use crate::shared::Locked;

/// Display memory shared by the ticks, the receive task and the main loop
pub type SharedDisplay = Locked<Display<DISP_MAX>>;

/// Message store shared by the receive task and the main loop
pub type SharedStore = Locked<FlashStore<'static, STORE_SIZE>>;

/// Button state bits (slow tick writes, main loop acknowledges)
pub static BUTTON: SharedButton = SharedButton::new();

/// Scroll speed, scroll enable and playlist read cursor
pub static PLAYBACK: Playback = Playback::new(INITIAL_SCROLL_SPEED);

/// Column refresh suspension while the slow tick scrolls
pub static REFRESH: RefreshSwitch = RefreshSwitch::new();

/// A button event is waiting for the main loop
pub static BUTTON_EVENT: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// The receive task wrote to the store
pub static STORE_ACTIVITY: Signal<CriticalSectionRawMutex, ()> = Signal::new();
