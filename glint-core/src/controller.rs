//! Main-loop controller
//!
//! Ties button events, serial session effects and playback together:
//!
//! - a short press shows the message at the read cursor and moves the
//!   cursor to the following record
//! - a long press runs a sleep cycle
//! - a serial reset blanks the display, shows the logo and rewinds playback
//! - a live session draws straight onto the display

use embedded_hal_async::delay::DelayNs;
use glint_hal::{ByteStore, WakeSource};
use glint_protocol::Feed;

use crate::button::{ButtonEvent, SharedButton};
use crate::display::Display;
use crate::power::PowerManager;
use crate::render::{RenderError, Rendered, Renderer};
use crate::resources::Resources;
use crate::scheduler::Playback;
use crate::shared::Shared;

/// Main-loop state
pub struct Controller<'a, R: Resources + ?Sized> {
    renderer: Renderer<'a, R>,
    playback: &'a Playback,
    button: &'a SharedButton,
    logo_glyph: Option<u8>,
}

impl<'a, R: Resources + ?Sized> Controller<'a, R> {
    pub fn new(
        resources: &'a R,
        playback: &'a Playback,
        button: &'a SharedButton,
        logo_glyph: Option<u8>,
    ) -> Self {
        Self {
            renderer: Renderer::new(resources),
            playback,
            button,
            logo_glyph,
        }
    }

    /// Show the message at the read cursor and advance the cursor
    pub fn show_next<St, D, const N: usize>(
        &self,
        store: &St,
        display: &D,
    ) -> Result<Rendered, RenderError>
    where
        St: Shared,
        St::Target: ByteStore,
        D: Shared<Target = Display<N>>,
    {
        let offset = self.playback.read_cursor();
        let rendered =
            store.with(|s| display.with(|d| self.renderer.render(&*s, offset, d)))?;

        self.playback.set_scroll_speed(rendered.speed);
        self.playback.set_read_cursor(rendered.next_offset);
        debug!(
            "show: record at {=usize}, next {=usize}",
            offset,
            rendered.next_offset
        );
        Ok(rendered)
    }

    /// Apply the display side of a processed serial byte
    pub fn apply_feed<D, const N: usize>(&self, feed: Feed, display: &D)
    where
        D: Shared<Target = Display<N>>,
    {
        let resources = self.renderer.resources();
        match feed {
            Feed::None | Feed::Stored(_) => {}
            Feed::Reset => {
                display.with(|d| {
                    d.clear();
                    if let Some(glyph) = self.logo_glyph {
                        d.append_glyph(glyph, resources);
                    }
                });
                self.playback.set_read_cursor(0);
                info!("serial: session reset");
            }
            Feed::LiveMode(mode) => {
                let settings = mode.decode();
                display.with(|d| {
                    d.configure_scroll(settings.increment, settings.direction, settings.delay);
                    d.clear();
                });
                self.playback.set_scroll_speed(settings.speed);
                self.playback.set_scroll_enabled(true);
            }
            Feed::LiveGlyph(code) => display.with(|d| {
                if d.cursor() > 0 {
                    d.append_raw(0);
                }
                d.append_glyph(code, resources);
            }),
        }
    }

    /// Handle a pending button event, if any
    pub async fn poll<St, D, W, Dl, const N: usize>(
        &self,
        store: &St,
        display: &D,
        power: &mut PowerManager<W, Dl>,
    ) -> Option<ButtonEvent>
    where
        St: Shared,
        St::Target: ByteStore,
        D: Shared<Target = Display<N>>,
        W: WakeSource,
        Dl: DelayNs,
    {
        let event = self.button.poll()?;
        match event {
            ButtonEvent::Release => {
                if let Err(e) = self.show_next(store, display) {
                    warn!("show: render failed: {}", e);
                    self.playback.set_read_cursor(0);
                }
            }
            ButtonEvent::LongPress => {
                power
                    .sleep(display, self.renderer.resources(), self.playback)
                    .await;
            }
        }
        self.button.acknowledge();
        Some(event)
    }

    /// Power-on behavior: sleep first or show the first message
    pub async fn start<St, D, W, Dl, const N: usize>(
        &self,
        store: &St,
        display: &D,
        power: &mut PowerManager<W, Dl>,
    ) where
        St: Shared,
        St::Target: ByteStore,
        D: Shared<Target = Display<N>>,
        W: WakeSource,
        Dl: DelayNs,
    {
        if power.config().start_asleep {
            power
                .sleep(display, self.renderer.resources(), self.playback)
                .await;
            self.button.acknowledge();
        } else {
            if let Err(e) = self.show_next(store, display) {
                warn!("show: render failed: {}", e);
            }
            self.playback.set_scroll_enabled(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonSampler;
    use crate::config::{Geometry, PowerConfig};
    use crate::power::testing::{FakeDelay, FakeWake, Log, Step};
    use crate::resources::testing::resources;
    use crate::resources::StaticResources;
    use core::cell::RefCell;
    use embassy_futures::block_on;
    use glint_hal::MemoryStore;
    use glint_protocol::{ModeByte, SerialSession, SessionConfig, UploadBuilder};

    struct Rig {
        res: StaticResources<'static, 5>,
        store: RefCell<MemoryStore<64>>,
        display: RefCell<Display<64>>,
        playback: Playback,
        button: SharedButton,
        log: Log,
    }

    impl Rig {
        fn new(playlist: &[&str]) -> Self {
            let mut builder = UploadBuilder::<128>::new().unwrap();
            for text in playlist {
                builder.text(ModeByte(0x44), text).unwrap();
            }
            let stream = builder.finish().unwrap();

            let mut store = MemoryStore::new();
            let mut session = SerialSession::default();
            for &byte in stream.iter() {
                session.feed(byte, &mut store).unwrap();
            }

            Self {
                res: resources(),
                store: RefCell::new(store),
                display: RefCell::new(Display::new(Geometry::default())),
                playback: Playback::new(14),
                button: SharedButton::new(),
                log: Log::default(),
            }
        }

        fn controller(&self) -> Controller<'_, StaticResources<'static, 5>> {
            Controller::new(&self.res, &self.playback, &self.button, Some(b'H'))
        }

        fn power(&self, config: PowerConfig) -> PowerManager<FakeWake<'_>, FakeDelay<'_>> {
            PowerManager::new(FakeWake(&self.log), FakeDelay(&self.log), config)
        }

        fn power_downs(&self) -> usize {
            self.log.borrow().iter().filter(|s| **s == Step::PowerDown).count()
        }

        fn click(&self) {
            let mut sampler = ButtonSampler::new(100);
            sampler.sample(&self.button, true);
            sampler.sample(&self.button, false);
        }
    }

    #[test]
    fn test_release_cycles_playlist() {
        let rig = Rig::new(&["H", "ii"]);
        let controller = rig.controller();
        let mut power = rig.power(PowerConfig::default());

        let mut widths = Vec::new();
        for _ in 0..3 {
            rig.click();
            let event = block_on(controller.poll(&rig.store, &rig.display, &mut power));
            assert_eq!(event, Some(ButtonEvent::Release));
            widths.push(rig.display.borrow().cursor());
        }

        // "H", "i i", then back to "H"
        assert_eq!(widths, [5, 3, 5]);
        assert_eq!(rig.playback.scroll_speed(), 7);
        assert_eq!(rig.button.poll(), None);
    }

    #[test]
    fn test_long_press_sleeps() {
        let rig = Rig::new(&["H"]);
        let controller = rig.controller();
        let mut power = rig.power(PowerConfig::default());

        let mut sampler = ButtonSampler::new(0);
        sampler.sample(&rig.button, true);
        sampler.sample(&rig.button, true);

        let event = block_on(controller.poll(&rig.store, &rig.display, &mut power));
        assert_eq!(event, Some(ButtonEvent::LongPress));
        assert_eq!(rig.power_downs(), 1);
        assert_eq!(block_on(controller.poll(&rig.store, &rig.display, &mut power)), None);
    }

    #[test]
    fn test_start_awake_shows_first_message() {
        let rig = Rig::new(&["ii", "H"]);
        let controller = rig.controller();
        let config = PowerConfig {
            start_asleep: false,
            ..Default::default()
        };
        let mut power = rig.power(config);

        block_on(controller.start(&rig.store, &rig.display, &mut power));
        assert_eq!(rig.display.borrow().cursor(), 3);
        assert!(rig.playback.scroll_enabled());
        assert_eq!(rig.playback.read_cursor(), 4);
        assert!(rig.log.borrow().is_empty());
    }

    #[test]
    fn test_start_asleep() {
        let rig = Rig::new(&["H"]);
        let controller = rig.controller();
        let mut power = rig.power(PowerConfig::default());

        block_on(controller.start(&rig.store, &rig.display, &mut power));
        assert_eq!(rig.power_downs(), 1);
        assert_eq!(rig.button.poll(), None);
    }

    #[test]
    fn test_reset_rewinds_and_shows_logo() {
        let rig = Rig::new(&["ii", "H"]);
        let controller = rig.controller();
        rig.playback.set_read_cursor(4);

        let mut session = SerialSession::default();
        let mut store = rig.store.borrow_mut();
        let mut feeds = Vec::new();
        for byte in [27u8, b'x'] {
            feeds.push(session.feed(byte, &mut *store).unwrap());
        }
        drop(store);
        for feed in feeds {
            controller.apply_feed(feed, &rig.display);
        }

        assert_eq!(rig.playback.read_cursor(), 0);
        assert_eq!(session.write_cursor(), 0);
        assert_eq!(rig.display.borrow().cursor(), 5);
    }

    #[test]
    fn test_live_session_draws_directly() {
        let rig = Rig::new(&["H"]);
        let controller = rig.controller();
        let mut session = SerialSession::new(SessionConfig { live_display: true });

        for &byte in b"HD\x4Fii" {
            let feed = rig.store.with(|s| session.feed(byte, s)).unwrap();
            controller.apply_feed(feed, &rig.display);
        }

        assert_eq!(rig.display.borrow().cursor(), 3);
        assert_eq!(rig.playback.scroll_speed(), 2);
        assert!(rig.playback.scroll_enabled());
        // The store still holds the uploaded playlist
        assert_eq!(rig.store.borrow().as_bytes()[..2], [0x44, b'H']);
    }
}
