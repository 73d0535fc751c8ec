//! Critical-section lock for state shared with the tick tasks

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use glint_core::Shared;

/// A value behind a blocking critical-section mutex
pub struct Locked<T>(Mutex<CriticalSectionRawMutex, RefCell<T>>);

impl<T> Locked<T> {
    pub const fn new(value: T) -> Self {
        Self(Mutex::new(RefCell::new(value)))
    }
}

impl<T> Shared for Locked<T> {
    type Target = T;

    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.0.lock(|cell| f(&mut cell.borrow_mut()))
    }
}
