//! Physical dimensions of the supported panels, and the character grid they give with the
//! built-in font.

use crate::glyph::CELL_WIDTH;

/// Pixel dimensions of a panel. Display RAM is organized in banks (also called pages): strips 8
/// pixels tall, where one byte written is one column of 8 vertical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelGeometry {
    width: u8,
    banks: u8,
    chars_per_line: u8,
}

impl PanelGeometry {
    /// Describe a panel of `width` x `height` pixels. `height` must be a whole number of banks.
    pub const fn new(width: u8, height: u8) -> Self {
        assert!(height % 8 == 0 && height > 0);
        assert!(width as usize >= CELL_WIDTH);
        PanelGeometry {
            width,
            banks: height / 8,
            chars_per_line: (width as usize / CELL_WIDTH) as u8,
        }
    }

    /// Width in pixel columns.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of 8-pixel banks.
    pub fn banks(&self) -> u8 {
        self.banks
    }

    pub fn chars_per_line(&self) -> u8 {
        self.chars_per_line
    }

    /// Text lines on screen, one per bank.
    pub fn max_lines(&self) -> u8 {
        self.banks
    }

    /// Pixel column where character cell `column` starts.
    pub fn pixel_column(&self, column: u8) -> usize {
        column as usize * CELL_WIDTH
    }

    /// Whether a character cell starting at `column` would reach the right edge. Text breaks to
    /// the next line before such a cell.
    pub fn in_wrap_margin(&self, column: u8) -> bool {
        self.pixel_column(column) + CELL_WIDTH >= self.width as usize
    }

    /// Whether (`bank`, pixel `x`) addresses display RAM.
    pub fn contains(&self, bank: u8, x: u8) -> bool {
        bank < self.banks && x < self.width
    }
}

/// 128x64 SSD1306 OLED module.
pub static SSD1306: PanelGeometry = PanelGeometry::new(128, 64);

/// 84x48 PCD8544 LCD module (Nokia 5110).
pub static PCD8544: PanelGeometry = PanelGeometry::new(84, 48);
