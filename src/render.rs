//! The text render engine: turns bytes of text into glyph columns on a panel.
//!
//! The controller's RAM write pointer has to follow the logical cursor exactly, otherwise glyph
//! columns land in the wrong bank. So every time the cursor moves, the new position is pushed to
//! the controller before any more pixel data goes out.

use itertools::iproduct;

use crate::cursor::Cursor;
use crate::error::Error;
use crate::geometry::PanelGeometry;
use crate::glyph;
use crate::interface::DisplayInterface;
use crate::panel::Panel;

/// Renders onto one panel through its interface, moving the given cursor.
///
/// Renderers are intended to be short-lived and mutably borrow the transport and the cursor, so
/// two renders can never interleave on the same panel.
pub struct Renderer<'a, P, DI>
where
    P: 'a + Panel,
    DI: 'a + DisplayInterface,
{
    panel: &'a P,
    iface: &'a mut DI,
    cursor: &'a mut Cursor,
}

impl<'a, P, DI> Renderer<'a, P, DI>
where
    P: 'a + Panel,
    DI: 'a + DisplayInterface,
{
    pub fn new(panel: &'a P, iface: &'a mut DI, cursor: &'a mut Cursor) -> Self {
        Self {
            panel,
            iface,
            cursor,
        }
    }

    fn geometry(&self) -> &'static PanelGeometry {
        self.panel.geometry()
    }

    /// Push the cursor position to the controller.
    fn sync(&mut self) -> Result<(), Error> {
        let geometry = self.geometry();
        let x = geometry.pixel_column(self.cursor.column()) as u8;
        self.panel.set_address(self.iface, self.cursor.line(), x)
    }

    /// Blank every bank, then home the cursor.
    ///
    /// Each bank gets its own address command followed by a full row of zero bytes, so the
    /// result does not depend on how the controller wraps its write pointer.
    pub fn clear_screen(&mut self) -> Result<(), Error> {
        let geometry = self.geometry();
        for (bank, x) in iproduct!(0..geometry.banks(), 0..geometry.width()) {
            if x == 0 {
                self.panel.set_address(self.iface, bank, 0)?;
            }
            self.iface.send_data(0x00)?;
        }
        self.cursor.reset();
        Ok(())
    }

    /// Draw `text` starting at the current cursor position.
    ///
    /// `\n` starts a new line. Lines wrap when full, and the line after the last one is the
    /// first one again. Stops at the first transport error; whatever was drawn up to that point
    /// stays on the panel.
    pub fn write_text(&mut self, text: &[u8]) -> Result<(), Error> {
        self.sync()?;
        for &ch in text {
            if ch == b'\n' {
                self.newline()?;
            } else {
                self.put_char(ch)?;
            }
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<(), Error> {
        let geometry = self.geometry();
        self.cursor.advance_after_newline(geometry);
        self.sync()
    }

    fn put_char(&mut self, ch: u8) -> Result<(), Error> {
        let geometry = self.geometry();
        if self.cursor.needs_wrap(geometry) {
            self.newline()?;
        }
        for &column in glyph::lookup(ch) {
            self.iface.send_data(column)?;
        }
        for _ in 0..glyph::GLYPH_SPACING {
            self.iface.send_data(0x00)?;
        }
        self.cursor.advance_after_glyph(geometry);
        self.sync()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::geometry::{PCD8544, SSD1306};
    use crate::interface::test_spy::{Sent, TestSpyInterface};
    use crate::panel::{Pcd8544, Ssd1306};
    use std::vec::Vec;

    fn render<P: Panel>(panel: &P, di: &TestSpyInterface, cursor: &mut Cursor, text: &[u8]) {
        let mut iface = di.split();
        Renderer::new(panel, &mut iface, cursor)
            .write_text(text)
            .unwrap();
    }

    #[test]
    fn clear_screen_blanks_every_bank() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        cursor.set(3, 7, &SSD1306).unwrap();
        {
            let mut iface = di.split();
            Renderer::new(&Ssd1306, &mut iface, &mut cursor)
                .clear_screen()
                .unwrap();
        }
        assert_eq!(cursor, Cursor::new());
        assert_eq!(di.data_bytes(), 8 * 128);

        let mut expect = Vec::new();
        for bank in 0..8 {
            expect.extend_from_slice(sends!(0x21, 0, 127, 0x22, bank, 7));
            expect.push(send!([0; 128]));
        }
        di.check_multi(&expect);
    }

    #[test]
    fn clear_screen_pcd8544() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        {
            let mut iface = di.split();
            Renderer::new(&Pcd8544, &mut iface, &mut cursor)
                .clear_screen()
                .unwrap();
        }
        assert_eq!(di.data_bytes(), 6 * 84);

        let mut expect = Vec::new();
        for bank in 0..6u8 {
            expect.extend_from_slice(sends!((0x40 | bank), 0x80));
            expect.push(send!([0; 84]));
        }
        di.check_multi(&expect);
    }

    #[test]
    fn glyph_then_spacing_then_position() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        render(&Pcd8544, &di, &mut cursor, b"H1");
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x40, 0x80, // home
            [0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00], // 'H'
            0x40, 0x86, // column 1
            [0x00, 0x42, 0x7F, 0x40, 0x00, 0x00], // '1'
            0x40, 0x8C // column 2
        ));
        assert_eq!((cursor.line(), cursor.column()), (0, 2));
    }

    #[test]
    fn newline_moves_to_next_bank() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        render(&Pcd8544, &di, &mut cursor, b"\n\n");
        di.check_multi(sends!(0x40, 0x80, 0x41, 0x80, 0x42, 0x80));
        assert_eq!((cursor.line(), cursor.column()), (2, 0));
    }

    #[test]
    fn unsupported_bytes_render_blank() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        render(&Pcd8544, &di, &mut cursor, b"!");
        di.check_multi(sends!(0x40, 0x80, [0, 0, 0, 0, 0, 0], 0x40, 0x86));
    }

    #[test]
    fn full_line_wraps_once() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        render(&Ssd1306, &di, &mut cursor, &[b'A'; 21]);
        assert_eq!((cursor.line(), cursor.column()), (1, 0));

        let mut expect = Vec::new();
        expect.extend_from_slice(sends!(0x21, 0, 127, 0x22, 0, 7));
        for column in 1..21u8 {
            expect.push(send!([0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00]));
            expect.extend_from_slice(sends!(0x21, (column * 6), 127, 0x22, 0, 7));
        }
        // The 21st glyph is followed by the only move to bank 1.
        expect.push(send!([0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00]));
        expect.extend_from_slice(sends!(0x21, 0, 127, 0x22, 1, 7));
        di.check_multi(&expect);

        render(&Ssd1306, &di, &mut cursor, b"A");
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        assert_eq!(di.data_bytes(), 22 * 6);
    }

    #[test]
    fn last_cell_of_a_full_width_line_is_skipped() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        render(&Pcd8544, &di, &mut cursor, &[b'A'; 13]);
        assert_eq!((cursor.line(), cursor.column()), (0, 13));
        let mut di = di;
        di.clear();

        render(&Pcd8544, &di, &mut cursor, b"A");
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x40, (0x80 | 78), // column 13
            0x41, 0x80, // broken before drawing
            [0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00],
            0x41, 0x86
        ));
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
    }

    #[test]
    fn lines_are_a_ring() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        render(&Ssd1306, &di, &mut cursor, &[b'\n'; 7]);
        assert_eq!(cursor.line(), 7);
        render(&Ssd1306, &di, &mut cursor, b"\n");
        assert_eq!(cursor.line(), 0);
        render(&Ssd1306, &di, &mut cursor, &[b'\n'; 8]);
        assert_eq!(cursor.line(), 0);
    }

    #[test]
    fn filling_the_screen_returns_to_the_top() {
        let di = TestSpyInterface::new();
        let mut cursor = Cursor::new();
        let cells = SSD1306.chars_per_line() as usize * SSD1306.max_lines() as usize;
        render(&Ssd1306, &di, &mut cursor, &vec![b'X'; cells]);
        assert_eq!(cursor, Cursor::new());

        // The LCD holds 13 glyphs per line.
        let mut cursor = Cursor::new();
        render(&Pcd8544, &di, &mut cursor, &vec![b'X'; 13 * PCD8544.max_lines() as usize]);
        assert_eq!((cursor.line(), cursor.column()), (5, 13));
        render(&Pcd8544, &di, &mut cursor, b"X");
        assert_eq!((cursor.line(), cursor.column()), (0, 1));
    }

    #[test]
    fn transport_error_stops_the_render() {
        let di = TestSpyInterface::new();
        di.fail_on_data(3);
        let mut cursor = Cursor::new();
        let mut iface = di.split();
        let result = Renderer::new(&Ssd1306, &mut iface, &mut cursor).write_text(b"AB");
        assert_eq!(result, Err(Error::Transport(TransportError::Bus)));
        di.check_multi(sends!(0x21, 0, 127, 0x22, 0, 7, [0x7C, 0x12]));
        assert_eq!(cursor, Cursor::new());
    }
}
