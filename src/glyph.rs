//! The built-in 5x7 font.
//!
//! Each glyph is five vertical pixel columns, least significant bit at the top, which is the
//! byte layout both controllers expect for one column of one bank. Only digits and letters have
//! shapes; letters are case-folded and everything else renders as a blank cell.

/// Width of a glyph in pixel columns.
pub const GLYPH_WIDTH: usize = 5;

/// Blank pixel columns appended after every glyph.
pub const GLYPH_SPACING: usize = 1;

/// Pixel columns one character occupies on screen.
pub const CELL_WIDTH: usize = GLYPH_WIDTH + GLYPH_SPACING;

pub type Glyph = [u8; GLYPH_WIDTH];

const SPACE: usize = 0;
const FIRST_DIGIT: usize = 1;
const FIRST_LETTER: usize = 11;

#[cfg_attr(rustfmt, rustfmt_skip)]
static FONT_5X7: [Glyph; 37] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
];

fn index(ch: u8) -> usize {
    match ch {
        b'0'..=b'9' => FIRST_DIGIT + (ch - b'0') as usize,
        b'A'..=b'Z' => FIRST_LETTER + (ch - b'A') as usize,
        b'a'..=b'z' => FIRST_LETTER + (ch - b'a') as usize,
        _ => SPACE,
    }
}

/// Look up the glyph for one byte of text. Never fails: bytes without a shape map to the blank
/// glyph.
pub fn lookup(ch: u8) -> &'static Glyph {
    &FONT_5X7[index(ch)]
}
