//! One bound panel and all of its mutable state, behind a single lock.
//!
//! Every operation holds the lock for its whole duration, bus transfers included. A stalled bus
//! therefore stalls every other caller of the same session; distinct sessions never contend.

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use log::{debug, info};
use spin::Mutex;

use crate::config::Config;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::geometry::PanelGeometry;
use crate::interface::DisplayInterface;
use crate::panel::Panel;
use crate::render::Renderer;

/// Size of the read-back buffer. Written text is cut to one byte less than this.
pub const MIRROR_CAPACITY: usize = 256;

/// Longest text a single write renders.
pub const MAX_TEXT_LEN: usize = MIRROR_CAPACITY - 1;

/// How long the farewell text stays up before the panel is blanked.
pub const FAREWELL_HOLD_MS: u32 = 1000;

struct State<DI> {
    iface: DI,
    cursor: Cursor,
    enabled: bool,
    contrast: u8,
    /// The last text accepted by `write_text`.
    mirror: Vec<u8, MIRROR_CAPACITY>,
}

/// A bound panel: the unit of mutual exclusion.
pub struct DisplaySession<P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    panel: P,
    farewell: Option<&'static [u8]>,
    state: Mutex<State<DI>>,
}

impl<P, DI> DisplaySession<P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    /// Bring up the panel behind `iface`: run its init sequence, blank it, and show the
    /// configured banner if any.
    pub fn bind(panel: P, mut iface: DI, config: Config) -> Result<Self, Error> {
        let contrast = config.contrast.unwrap_or(P::DEFAULT_CONTRAST);
        info!("binding {} panel, contrast {}", P::NAME, contrast);
        panel.init(&mut iface, contrast)?;
        let mut cursor = Cursor::new();
        {
            let mut renderer = Renderer::new(&panel, &mut iface, &mut cursor);
            renderer.clear_screen()?;
            if let Some(banner) = config.banner {
                renderer.write_text(&banner[..banner.len().min(MAX_TEXT_LEN)])?;
            }
        }
        Ok(DisplaySession {
            panel,
            farewell: config.farewell,
            state: Mutex::new(State {
                iface,
                cursor,
                enabled: true,
                contrast,
                mirror: Vec::new(),
            }),
        })
    }

    /// Blank the panel, switch it off, and hand back the transport.
    pub fn unbind(self) -> Result<DI, Error> {
        let DisplaySession { panel, state, .. } = self;
        let mut state = state.into_inner();
        info!("unbinding {} panel", P::NAME);
        Self::shut_down(&panel, &mut state)?;
        Ok(state.iface)
    }

    /// Like `unbind`, but first shows the configured farewell text for `FAREWELL_HOLD_MS`.
    /// Without a farewell in the `Config` this is the same as `unbind`.
    pub fn unbind_with_farewell<D>(self, delay: &mut D) -> Result<DI, Error>
    where
        D: DelayNs,
    {
        let DisplaySession {
            panel,
            farewell,
            state,
        } = self;
        let mut state = state.into_inner();
        info!("unbinding {} panel", P::NAME);
        if let Some(text) = farewell {
            let mut renderer = Renderer::new(&panel, &mut state.iface, &mut state.cursor);
            renderer.clear_screen()?;
            renderer.write_text(&text[..text.len().min(MAX_TEXT_LEN)])?;
            delay.delay_ms(FAREWELL_HOLD_MS);
        }
        Self::shut_down(&panel, &mut state)?;
        Ok(state.iface)
    }

    fn shut_down(panel: &P, state: &mut State<DI>) -> Result<(), Error> {
        Renderer::new(panel, &mut state.iface, &mut state.cursor).clear_screen()?;
        panel.set_display_on(&mut state.iface, false)
    }

    pub fn geometry(&self) -> &'static PanelGeometry {
        self.panel.geometry()
    }

    /// Replace the whole screen with `text`.
    ///
    /// The text is cut to `MAX_TEXT_LEN` bytes and kept for read-back before anything is drawn,
    /// then the screen is cleared and the text rendered from the top left. Returns the length
    /// of `text`: the cut-off tail counts as consumed.
    pub fn write_text(&self, text: &[u8]) -> Result<usize, Error> {
        let accepted = &text[..text.len().min(MAX_TEXT_LEN)];
        if accepted.len() < text.len() {
            debug!(
                "{}: text of {} bytes cut to {}",
                P::NAME,
                text.len(),
                accepted.len()
            );
        } else {
            debug!("{}: writing {} bytes", P::NAME, text.len());
        }

        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.mirror.clear();
        state
            .mirror
            .extend_from_slice(accepted)
            .map_err(|_| Error::BufferOverflow)?;

        let mut renderer = Renderer::new(&self.panel, &mut state.iface, &mut state.cursor);
        renderer.clear_screen()?;
        renderer.write_text(accepted)?;
        Ok(text.len())
    }

    /// Blank the screen and forget the read-back text.
    pub fn clear(&self) -> Result<(), Error> {
        self.write_text(&[]).map(|_| ())
    }

    /// Copy read-back text starting at `offset` into `buf`. Returns the number of bytes copied,
    /// 0 once `offset` is at or past the end. Never touches the bus.
    pub fn read_back(&self, offset: usize, buf: &mut [u8]) -> usize {
        let state = self.state.lock();
        let remaining = state.mirror.get(offset..).unwrap_or(&[]);
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        n
    }

    /// A copy of the read-back text.
    pub fn text(&self) -> Vec<u8, MIRROR_CAPACITY> {
        self.state.lock().mirror.clone()
    }

    /// Set brightness (OLED) or contrast (LCD), 0-255.
    pub fn set_brightness(&self, level: u8) -> Result<(), Error> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        debug!("{}: contrast {} -> {}", P::NAME, state.contrast, level);
        self.panel.set_contrast(&mut state.iface, level)?;
        state.contrast = level;
        Ok(())
    }

    pub fn brightness(&self) -> u8 {
        self.state.lock().contrast
    }

    /// Switch the panel output on or off. Screen contents and read-back text are kept.
    pub fn set_enabled(&self, on: bool) -> Result<(), Error> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        self.panel.set_display_on(&mut state.iface, on)?;
        state.enabled = on;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.state.lock().enabled
    }

    /// Where the next glyph would be drawn.
    pub fn cursor(&self) -> Cursor {
        self.state.lock().cursor
    }
}
