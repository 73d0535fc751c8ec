//! Store persistence task
//!
//! Flash pages wear out, so the mirror is written back only after the
//! upload has been quiet for [`QUIET_MS`], and once more before sleeping.

use defmt::*;
use embassy_time::{with_timeout, Duration};

use glint_core::Shared;

use crate::channels::{SharedStore, STORE_ACTIVITY};

/// Quiet time on the serial link before the store is written back
pub const QUIET_MS: u64 = 1000;

/// Write the store back to flash if it changed
pub fn persist(store: &SharedStore) {
    match store.with(|s| s.flush()) {
        Ok(true) => info!("Store: saved"),
        Ok(false) => {}
        Err(e) => warn!("Store: flush failed: {:?}", e),
    }
}

#[embassy_executor::task]
pub async fn store_task(store: &'static SharedStore) {
    info!("Store task started");

    loop {
        STORE_ACTIVITY.wait().await;
        while with_timeout(Duration::from_millis(QUIET_MS), STORE_ACTIVITY.wait())
            .await
            .is_ok()
        {}
        persist(store);
    }
}
