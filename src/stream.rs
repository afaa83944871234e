//! Byte-stream access to a session, the way a character device exposes a display: writes
//! replace the screen text, reads return the last text written.

use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::panel::Panel;
use crate::session::DisplaySession;

/// Out-of-band control requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Brightness (OLED) or contrast (LCD), 0-255.
    SetContrast(u8),
    /// Switch the panel output on or off.
    SetEnabled(bool),
    /// Blank the screen, same as writing empty text.
    Clear,
}

/// An open handle on a session, with its own read position.
pub struct TextStream<'s, P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    session: &'s DisplaySession<P, DI>,
    position: usize,
}

impl<P, DI> DisplaySession<P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    /// Open a stream positioned at the start of the read-back text.
    pub fn open(&self) -> TextStream<'_, P, DI> {
        TextStream {
            session: self,
            position: 0,
        }
    }
}

impl<'s, P, DI> TextStream<'s, P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    /// Render `bytes` as the new screen text. Each byte is one character. Returns `bytes.len()`;
    /// anything past `session::MAX_TEXT_LEN` is dropped without error.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        self.session.write_text(bytes)
    }

    /// Read the last written text from the current position. Returns 0 at the end.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = self.session.read_back(self.position, buf);
        self.position += n;
        n
    }

    /// Move the read position back to the start.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn control(&mut self, request: Control) -> Result<(), Error> {
        match request {
            Control::SetContrast(level) => self.session.set_brightness(level),
            Control::SetEnabled(on) => self.session.set_enabled(on),
            Control::Clear => self.session.clear(),
        }
    }
}

impl<'s, P, DI> embedded_io::ErrorType for TextStream<'s, P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    type Error = Error;
}

impl<'s, P, DI> embedded_io::Read for TextStream<'s, P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        Ok(TextStream::read(self, buf))
    }
}

impl<'s, P, DI> embedded_io::Write for TextStream<'s, P, DI>
where
    P: Panel,
    DI: DisplayInterface,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        TextStream::write(self, buf)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}
