//! Access to state shared between tasks
//!
//! The display and the store are touched by the tick handlers, the receive
//! handler and the main loop. Each firmware picks its own lock; the core
//! only needs short, non-reentrant access through [`Shared`].

use core::cell::RefCell;

/// Short exclusive access to a shared value
pub trait Shared {
    type Target: ?Sized;

    /// Run `f` with exclusive access
    ///
    /// `f` must not block and must not access the same value again.
    fn with<R>(&self, f: impl FnOnce(&mut Self::Target) -> R) -> R;
}

/// Single-context access, used on the host
impl<T: ?Sized> Shared for RefCell<T> {
    type Target = T;

    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
