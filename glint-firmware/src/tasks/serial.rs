//! Serial receive task
//!
//! Feeds every received byte through the session state machine. Stored
//! bytes land in the RAM mirror of the store; the store task persists them
//! once the link goes quiet.

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartRx;
use embassy_time::{Duration, Timer};

use glint_core::{Controller, Shared};
use glint_protocol::{Feed, SerialSession, SessionConfig, SessionError};
use glint_hal_stm32f0::UartBusError;

use crate::channels::{SharedDisplay, SharedStore, BUTTON, PLAYBACK, STORE_ACTIVITY};
use crate::RESOURCES;

#[embassy_executor::task]
pub async fn serial_rx_task(
    mut rx: UartRx<'static, Async>,
    store: &'static SharedStore,
    display: &'static SharedDisplay,
    session: SessionConfig,
    logo_glyph: Option<u8>,
) {
    info!("Serial RX task started");

    let controller = Controller::new(&RESOURCES, &PLAYBACK, &BUTTON, logo_glyph);
    let mut session = SerialSession::new(session);
    let mut buf = [0u8; 1];

    loop {
        if let Err(e) = rx.read(&mut buf).await {
            warn!("UART read error: {:?}", UartBusError::from(e));
            Timer::after(Duration::from_millis(10)).await;
            continue;
        }

        match store.with(|s| session.feed(buf[0], s)) {
            Ok(Feed::Stored(_)) => STORE_ACTIVITY.signal(()),
            Ok(feed) => {
                if feed == Feed::Reset {
                    debug!("Serial: reset");
                }
                controller.apply_feed(feed, display);
            }
            Err(SessionError::StoreOverflow) => {
                warn!("Serial: store full at {}", session.write_cursor());
            }
            Err(e) => warn!("Serial: store error: {:?}", e),
        }
    }
}
