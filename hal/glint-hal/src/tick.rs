//! Tick source control
//!
//! The column refresh runs from the fast tick. Work that rewrites display
//! memory from the slow tick may suspend it for the duration.

/// Control over the fast (column refresh) tick
pub trait RefreshGate {
    /// Stop column refresh callbacks until `resume` is called
    fn suspend(&mut self);

    /// Re-enable column refresh callbacks
    fn resume(&mut self);

    /// Run `f` with the refresh tick suspended
    fn suspended<R>(&mut self, f: impl FnOnce() -> R) -> R {
        self.suspend();
        let result = f();
        self.resume();
        result
    }
}

/// Gate for hosts where refresh and scrolling cannot overlap
impl RefreshGate for () {
    fn suspend(&mut self) {}

    fn resume(&mut self) {}
}
