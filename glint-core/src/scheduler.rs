//! Tick handlers
//!
//! Two periodic sources drive the device. The fast tick (column refresh,
//! 1 kHz by default) lights the next matrix column. The slow tick (system
//! tick, 100 Hz) paces scrolling and samples the button.

use glint_hal::{OutputPin, RefreshGate};
use portable_atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

use crate::button::{ButtonSampler, SharedButton};
use crate::display::{Display, ScrollEvent};
use crate::matrix::MatrixDriver;
use crate::shared::Shared;

/// Playback state shared by the ticks, the main loop and the receive handler
pub struct Playback {
    scroll_speed: AtomicU8,
    scroll_enabled: AtomicBool,
    read_cursor: AtomicU16,
}

impl Playback {
    /// Scrolling off, playlist at the first record
    pub const fn new(scroll_speed: u8) -> Self {
        Self {
            scroll_speed: AtomicU8::new(scroll_speed),
            scroll_enabled: AtomicBool::new(false),
            read_cursor: AtomicU16::new(0),
        }
    }

    /// Slow ticks between scroll steps
    pub fn scroll_speed(&self) -> u8 {
        self.scroll_speed.load(Ordering::Relaxed)
    }

    pub fn set_scroll_speed(&self, speed: u8) {
        self.scroll_speed.store(speed, Ordering::Relaxed);
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled.load(Ordering::Acquire)
    }

    pub fn set_scroll_enabled(&self, enabled: bool) {
        self.scroll_enabled.store(enabled, Ordering::Release);
    }

    /// Store offset of the next record to show
    pub fn read_cursor(&self) -> usize {
        usize::from(self.read_cursor.load(Ordering::Acquire))
    }

    pub fn set_read_cursor(&self, offset: usize) {
        let offset = u16::try_from(offset).unwrap_or(0);
        self.read_cursor.store(offset, Ordering::Release);
    }
}

/// Suspends column refresh while the slow tick rewrites display memory
pub struct RefreshSwitch(AtomicBool);

impl Default for RefreshSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshSwitch {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn is_suspended(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl RefreshGate for &RefreshSwitch {
    fn suspend(&mut self) {
        self.0.store(true, Ordering::Release);
    }

    fn resume(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Fast tick: light the next column unless refresh is suspended
pub fn fast_tick<D, P, const N: usize, const ROWS: usize, const COLS: usize>(
    display: &D,
    matrix: &mut MatrixDriver<P, ROWS, COLS>,
    switch: &RefreshSwitch,
) where
    D: Shared<Target = Display<N>>,
    P: OutputPin,
{
    if switch.is_suspended() {
        return;
    }
    let frame = display.with(|d| d.refresh_step());
    matrix.show(frame);
}

/// Slow tick state
#[derive(Debug, Clone)]
pub struct SlowTick {
    scroll_timer: u8,
    sampler: ButtonSampler,
}

impl SlowTick {
    pub const fn new(longpress_ticks: u8) -> Self {
        Self {
            scroll_timer: 1,
            sampler: ButtonSampler::new(longpress_ticks),
        }
    }

    /// One slow tick
    ///
    /// Counts down the scroll timer; when it has run out it is reloaded
    /// from the playback speed and, if scrolling is enabled, one scroll
    /// step runs with refresh suspended. The button is sampled every tick.
    pub fn tick<D, G, const N: usize>(
        &mut self,
        playback: &Playback,
        display: &D,
        gate: &mut G,
        button: &SharedButton,
        pressed: bool,
    ) -> Option<ScrollEvent>
    where
        D: Shared<Target = Display<N>>,
        G: RefreshGate,
    {
        let event = if self.scroll_timer > 0 {
            self.scroll_timer -= 1;
            None
        } else {
            self.scroll_timer = playback.scroll_speed();
            if playback.scroll_enabled() {
                Some(gate.suspended(|| display.with(|d| d.scroll_step())))
            } else {
                None
            }
        };

        self.sampler.sample(button, pressed);
        event
    }
}
