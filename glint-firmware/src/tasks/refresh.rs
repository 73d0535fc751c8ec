//! Column refresh task (fast tick)
//!
//! Lights one matrix column per tick, so the whole window is redrawn at
//! the column frequency divided by the number of columns.

use defmt::*;
use embassy_time::{Duration, Ticker};

use glint_core::{fast_tick, MatrixDriver};
use glint_hal_stm32f0::LinePin;

use crate::board::{COLUMNS, ROWS};
use crate::channels::{SharedDisplay, REFRESH};

/// The matrix as wired on the board
pub type Matrix = MatrixDriver<LinePin<'static>, ROWS, COLUMNS>;

#[embassy_executor::task]
pub async fn refresh_task(display: &'static SharedDisplay, mut matrix: Matrix, period_us: u64) {
    info!("Refresh task started ({} us per column)", period_us);

    let mut ticker = Ticker::every(Duration::from_micros(period_us));

    loop {
        ticker.next().await;
        fast_tick(display, &mut matrix, &REFRESH);
    }
}
