//! The command set of the SSD1306 128x64 OLED controller, as used over I2C.
//!
//! Unlike the PCD8544, the SSD1306 takes command arguments through the command channel: every
//! byte of a command, opcode and arguments alike, is sent with `send_command`.

use super::{check_address, Panel};
use crate::error::Error;
use crate::geometry::{PanelGeometry, SSD1306};
use crate::interface::DisplayInterface;

pub const COLUMN_MAX: u8 = 127;
pub const PAGE_MAX: u8 = 7;
pub const NUM_ROWS: u8 = 64;
pub const ROW_MAX: u8 = NUM_ROWS - 1;

/// How the RAM write pointer moves as data is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    /// Column increments; at the end of the column range it returns to the range start and the
    /// page increments. `SetColumnAddress` and `SetPageAddress` define the window.
    Horizontal,
    /// Page increments; at the end of the page range the column increments.
    Vertical,
    /// Column increments within the current page only.
    Page,
}

/// Setting of the COM line scanning of rows. Changing this setting flips the image vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComScanDirection {
    /// COM0 is the first row of the display.
    RowZeroFirst,
    /// COM0 is the last row of the display.
    RowZeroLast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch the panel on (`true`) or into sleep (`false`).
    SetDisplayOn(bool),
    /// Set the contrast current. Range 0-255.
    SetContrast(u8),
    /// Set the memory addressing mode. See enum for details.
    SetAddressingMode(AddressingMode),
    /// Set the column window for horizontal or vertical addressing and move the pointer to its
    /// start. Range 0-127, start <= end.
    SetColumnAddress(u8, u8),
    /// Set the page window for horizontal or vertical addressing and move the pointer to its
    /// start. Range 0-7, start <= end.
    SetPageAddress(u8, u8),
    /// Set the oscillator frequency (0-15) and the display clock divide ratio (1-16).
    SetClockDivide(u8, u8),
    /// Set the number of active COM lines. Range 16-64.
    SetMuxRatio(u8),
    /// Vertical shift of the COM lines. Range 0-63.
    SetDisplayOffset(u8),
    /// Display RAM row shown on the first display row. Range 0-63.
    SetStartLine(u8),
    /// Enable or disable the internal charge pump. Modules without an external VCC supply need
    /// it enabled before the display is switched on.
    SetChargePump(bool),
    /// Map column address 127 to SEG0, mirroring the image horizontally.
    SetSegmentRemap(bool),
    /// Set the COM scan direction. See enum for details.
    SetComScanDirection(ComScanDirection),
    /// Set the COM pin hardware layout: alternative (interleaved) pin configuration, and
    /// left/right remap. The correct value depends on how the module is wired.
    SetComPins(bool, bool),
    /// Set the pre-charge phase lengths in DCLKs, phase 1 then phase 2. Range 1-15 each.
    SetPrecharge(u8, u8),
    /// Set the VCOMH deselect level. Range 0-7.
    SetVcomDeselect(u8),
    /// Light every pixel regardless of RAM contents (`true`), or follow RAM (`false`).
    SetEntireDisplayOn(bool),
    /// Invert the meaning of RAM bits.
    SetInverted(bool),
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 3];
        let bytes: Result<&[u8], Error> = match self {
            Command::SetDisplayOn(on) => ok_command!(arg_buf, if on { 0xAF } else { 0xAE }, []),
            Command::SetContrast(level) => ok_command!(arg_buf, 0x81, [level]),
            Command::SetAddressingMode(mode) => {
                let m = match mode {
                    AddressingMode::Horizontal => 0x00,
                    AddressingMode::Vertical => 0x01,
                    AddressingMode::Page => 0x02,
                };
                ok_command!(arg_buf, 0x20, [m])
            }
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=COLUMN_MAX, 0..=COLUMN_MAX) if start <= end => {
                    ok_command!(arg_buf, 0x21, [start, end])
                }
                _ => Err(Error::Parameter),
            },
            Command::SetPageAddress(start, end) => match (start, end) {
                (0..=PAGE_MAX, 0..=PAGE_MAX) if start <= end => {
                    ok_command!(arg_buf, 0x22, [start, end])
                }
                _ => Err(Error::Parameter),
            },
            Command::SetClockDivide(fosc, divide) => match (fosc, divide) {
                (0..=15, 1..=16) => ok_command!(arg_buf, 0xD5, [fosc << 4 | (divide - 1)]),
                _ => Err(Error::Parameter),
            },
            Command::SetMuxRatio(ratio) => match ratio {
                16..=NUM_ROWS => ok_command!(arg_buf, 0xA8, [ratio - 1]),
                _ => Err(Error::Parameter),
            },
            Command::SetDisplayOffset(offset) => match offset {
                0..=ROW_MAX => ok_command!(arg_buf, 0xD3, [offset]),
                _ => Err(Error::Parameter),
            },
            Command::SetStartLine(line) => match line {
                0..=ROW_MAX => ok_command!(arg_buf, 0x40 | line, []),
                _ => Err(Error::Parameter),
            },
            Command::SetChargePump(enable) => {
                ok_command!(arg_buf, 0x8D, [if enable { 0x14 } else { 0x10 }])
            }
            Command::SetSegmentRemap(remap) => {
                ok_command!(arg_buf, if remap { 0xA1 } else { 0xA0 }, [])
            }
            Command::SetComScanDirection(direction) => ok_command!(
                arg_buf,
                match direction {
                    ComScanDirection::RowZeroFirst => 0xC0,
                    ComScanDirection::RowZeroLast => 0xC8,
                },
                []
            ),
            Command::SetComPins(alternative, remap) => {
                let alt = if alternative { 0x10 } else { 0x00 };
                let lr = if remap { 0x20 } else { 0x00 };
                ok_command!(arg_buf, 0xDA, [0x02 | alt | lr])
            }
            Command::SetPrecharge(phase_1, phase_2) => match (phase_1, phase_2) {
                (1..=15, 1..=15) => ok_command!(arg_buf, 0xD9, [phase_2 << 4 | phase_1]),
                _ => Err(Error::Parameter),
            },
            Command::SetVcomDeselect(level) => match level {
                0..=7 => ok_command!(arg_buf, 0xDB, [level << 4]),
                _ => Err(Error::Parameter),
            },
            Command::SetEntireDisplayOn(on) => {
                ok_command!(arg_buf, if on { 0xA5 } else { 0xA4 }, [])
            }
            Command::SetInverted(inverted) => {
                ok_command!(arg_buf, if inverted { 0xA7 } else { 0xA6 }, [])
            }
        };
        for &byte in bytes? {
            iface.send_command(byte)?;
        }
        Ok(())
    }
}

/// A 128x64 SSD1306 module with its internal charge pump.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ssd1306;

impl Panel for Ssd1306 {
    const NAME: &'static str = "ssd1306";
    const DEFAULT_CONTRAST: u8 = 0xCF;

    fn geometry(&self) -> &'static PanelGeometry {
        &SSD1306
    }

    fn init<DI>(&self, iface: &mut DI, contrast: u8) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        Command::SetDisplayOn(false).send(iface)?;
        Command::SetClockDivide(8, 1).send(iface)?;
        Command::SetMuxRatio(NUM_ROWS).send(iface)?;
        Command::SetDisplayOffset(0).send(iface)?;
        Command::SetStartLine(0).send(iface)?;
        Command::SetChargePump(true).send(iface)?;
        Command::SetAddressingMode(AddressingMode::Horizontal).send(iface)?;
        Command::SetSegmentRemap(true).send(iface)?;
        Command::SetComScanDirection(ComScanDirection::RowZeroLast).send(iface)?;
        Command::SetComPins(true, false).send(iface)?;
        Command::SetContrast(contrast).send(iface)?;
        Command::SetPrecharge(1, 15).send(iface)?;
        Command::SetVcomDeselect(4).send(iface)?;
        Command::SetEntireDisplayOn(false).send(iface)?;
        Command::SetInverted(false).send(iface)?;
        Command::SetDisplayOn(true).send(iface)
    }

    fn set_address<DI>(&self, iface: &mut DI, bank: u8, x: u8) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        let geometry = self.geometry();
        check_address(geometry, bank, x)?;
        Command::SetColumnAddress(x, geometry.width() - 1).send(iface)?;
        Command::SetPageAddress(bank, geometry.banks() - 1).send(iface)
    }

    fn set_contrast<DI>(&self, iface: &mut DI, level: u8) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        Command::SetContrast(level).send(iface)
    }

    fn set_display_on<DI>(&self, iface: &mut DI, on: bool) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        Command::SetDisplayOn(on).send(iface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn set_column_address() {
        let mut di = TestSpyInterface::new();
        Command::SetColumnAddress(12, 127).send(&mut di).unwrap();
        di.check_multi(sends!(0x21, 12, 127));
        assert_eq!(
            Command::SetColumnAddress(128, 128).send(&mut di),
            Err(Error::Parameter)
        );
        assert_eq!(
            Command::SetColumnAddress(20, 10).send(&mut di),
            Err(Error::Parameter)
        );
    }

    #[test]
    fn set_page_address() {
        let mut di = TestSpyInterface::new();
        Command::SetPageAddress(3, 7).send(&mut di).unwrap();
        di.check_multi(sends!(0x22, 3, 7));
        assert_eq!(
            Command::SetPageAddress(8, 8).send(&mut di),
            Err(Error::Parameter)
        );
    }

    #[test]
    fn rejected_command_sends_nothing() {
        let di = TestSpyInterface::new();
        assert_eq!(
            Command::SetMuxRatio(65).send(&mut di.split()),
            Err(Error::Parameter)
        );
        assert_eq!(
            Command::SetMuxRatio(15).send(&mut di.split()),
            Err(Error::Parameter)
        );
        assert_eq!(
            Command::SetPrecharge(0, 15).send(&mut di.split()),
            Err(Error::Parameter)
        );
        assert_eq!(
            Command::SetClockDivide(16, 1).send(&mut di.split()),
            Err(Error::Parameter)
        );
        assert_eq!(
            Command::SetStartLine(64).send(&mut di.split()),
            Err(Error::Parameter)
        );
        di.check_multi(&[]);
    }

    #[test]
    fn packed_arguments() {
        let mut di = TestSpyInterface::new();
        Command::SetClockDivide(8, 1).send(&mut di).unwrap();
        Command::SetPrecharge(1, 15).send(&mut di).unwrap();
        Command::SetComPins(true, false).send(&mut di).unwrap();
        Command::SetComPins(false, true).send(&mut di).unwrap();
        Command::SetVcomDeselect(4).send(&mut di).unwrap();
        Command::SetStartLine(5).send(&mut di).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xD5, 0x80,
            0xD9, 0xF1,
            0xDA, 0x12,
            0xDA, 0x22,
            0xDB, 0x40,
            0x45
        ));
    }

    #[test]
    fn init_sequence() {
        let di = TestSpyInterface::new();
        Ssd1306.init(&mut di.split(), 0xCF).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xAE, // display off
            0xD5, 0x80, // clock
            0xA8, 0x3F, // 64 rows
            0xD3, 0x00, // no offset
            0x40, // start line 0
            0x8D, 0x14, // charge pump on
            0x20, 0x00, // horizontal addressing
            0xA1, // segment remap
            0xC8, // COM scan from the bottom
            0xDA, 0x12, // alternative COM pins
            0x81, 0xCF, // contrast
            0xD9, 0xF1, // precharge
            0xDB, 0x40, // VCOMH
            0xA4, // follow RAM
            0xA6, // normal
            0xAF // display on
        ));
    }

    #[test]
    fn set_address_window() {
        let di = TestSpyInterface::new();
        Ssd1306.set_address(&mut di.split(), 2, 30).unwrap();
        di.check_multi(sends!(0x21, 30, 127, 0x22, 2, 7));
    }

    #[test]
    fn set_address_off_panel() {
        let di = TestSpyInterface::new();
        assert_eq!(
            Ssd1306.set_address(&mut di.split(), 8, 0),
            Err(Error::Geometry { bank: 8, column: 0 })
        );
        assert_eq!(
            Ssd1306.set_address(&mut di.split(), 0, 128),
            Err(Error::Geometry {
                bank: 0,
                column: 128
            })
        );
        di.check_multi(&[]);
    }

    #[test]
    fn contrast_and_power() {
        let di = TestSpyInterface::new();
        Ssd1306.set_contrast(&mut di.split(), 0x10).unwrap();
        Ssd1306.set_display_on(&mut di.split(), false).unwrap();
        Ssd1306.set_display_on(&mut di.split(), true).unwrap();
        di.check_multi(sends!(0x81, 0x10, 0xAE, 0xAF));
    }
}
