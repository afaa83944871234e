//! Text cursor over the character grid of a panel.
//!
//! The cursor only tracks the logical position. Whoever moves it is responsible for pushing the
//! new position to the controller before sending more pixel data (see `render::Renderer`).

use log::warn;

use crate::error::Error;
use crate::geometry::PanelGeometry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    line: u8,
    column: u8,
}

impl Cursor {
    /// A cursor in the top left cell.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn reset(&mut self) {
        self.line = 0;
        self.column = 0;
    }

    /// Move one cell right, continuing on the next line after the last cell.
    pub fn advance_after_glyph(&mut self, geometry: &PanelGeometry) {
        self.column += 1;
        if self.column >= geometry.chars_per_line() {
            self.advance_after_newline(geometry);
        }
    }

    /// Move to the start of the next line. Lines form a ring: the line after the last one is the
    /// first one.
    pub fn advance_after_newline(&mut self, geometry: &PanelGeometry) {
        self.column = 0;
        self.line = (self.line + 1) % geometry.max_lines();
    }

    /// Whether a glyph drawn at the current position would reach the right edge, so the line
    /// has to be broken first.
    pub fn needs_wrap(&self, geometry: &PanelGeometry) -> bool {
        geometry.in_wrap_margin(self.column)
    }

    /// Place the cursor at an explicit cell.
    pub fn set(&mut self, line: u8, column: u8, geometry: &PanelGeometry) -> Result<(), Error> {
        if line >= geometry.max_lines() || column >= geometry.chars_per_line() {
            warn!("cursor position ({}, {}) is outside the panel", line, column);
            return Err(Error::Geometry {
                bank: line,
                column,
            });
        }
        self.line = line;
        self.column = column;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PCD8544, SSD1306};

    #[test]
    fn glyph_advance_wraps_at_end_of_line() {
        let mut cursor = Cursor::new();
        for _ in 0..20 {
            cursor.advance_after_glyph(&SSD1306);
        }
        assert_eq!((cursor.line(), cursor.column()), (0, 20));
        cursor.advance_after_glyph(&SSD1306);
        assert_eq!((cursor.line(), cursor.column()), (1, 0));
    }

    #[test]
    fn newline_is_a_ring() {
        let mut cursor = Cursor::new();
        for _ in 0..PCD8544.max_lines() - 1 {
            cursor.advance_after_newline(&PCD8544);
        }
        assert_eq!(cursor.line(), 5);
        cursor.advance_after_newline(&PCD8544);
        assert_eq!((cursor.line(), cursor.column()), (0, 0));
    }

    #[test]
    fn last_cell_of_last_line_wraps_to_top() {
        let mut cursor = Cursor::new();
        cursor.set(7, 20, &SSD1306).unwrap();
        cursor.advance_after_glyph(&SSD1306);
        assert_eq!((cursor.line(), cursor.column()), (0, 0));
    }

    #[test]
    fn wrap_needed_one_cell_before_the_edge() {
        let mut cursor = Cursor::new();
        for column in 0..13 {
            cursor.set(0, column, &PCD8544).unwrap();
            assert!(!cursor.needs_wrap(&PCD8544));
        }
        cursor.set(2, 13, &PCD8544).unwrap();
        assert!(cursor.needs_wrap(&PCD8544));

        cursor.set(0, 20, &SSD1306).unwrap();
        assert!(!cursor.needs_wrap(&SSD1306));
    }

    #[test]
    fn set_rejects_positions_off_the_panel() {
        let mut cursor = Cursor::new();
        assert_eq!(
            cursor.set(8, 0, &SSD1306),
            Err(Error::Geometry { bank: 8, column: 0 })
        );
        assert_eq!(
            cursor.set(0, 14, &PCD8544),
            Err(Error::Geometry { bank: 0, column: 14 })
        );
        assert_eq!(cursor, Cursor::new());
    }

    #[test]
    fn reset() {
        let mut cursor = Cursor::new();
        cursor.set(3, 4, &SSD1306).unwrap();
        cursor.reset();
        assert_eq!(cursor, Cursor::new());
    }
}
