//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod refresh;
pub mod serial;
pub mod store;
pub mod system_tick;

pub use refresh::refresh_task;
pub use serial::serial_rx_task;
pub use store::{persist, store_task};
pub use system_tick::system_tick_task;
