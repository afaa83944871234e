//! Controller-specific command sets, behind the `Panel` trait the render engine drives.
//!
//! The render engine only ever needs a handful of things from a controller: bring it up, move
//! its RAM write pointer, change contrast, and switch the output on or off. Everything else about
//! a controller (opcode values, argument packing, instruction set modes) stays in its module.

// Encodes an opcode and its arguments into `$buf`, evaluating to the bytes to send.
macro_rules! ok_command {
    ($buf:ident, $cmd:expr,[]) => {{
        $buf[0] = $cmd;
        Ok(&$buf[..1])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        Ok(&$buf[..2])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        $buf[2] = $arg1;
        Ok(&$buf[..3])
    }};
}

pub mod pcd8544;
pub mod ssd1306;

use crate::error::Error;
use crate::geometry::PanelGeometry;
use crate::interface::DisplayInterface;

pub use self::pcd8544::Pcd8544;
pub use self::ssd1306::Ssd1306;

pub trait Panel {
    /// Controller name, for log messages.
    const NAME: &'static str;

    /// Contrast level (0-255) used when the configuration does not set one.
    const DEFAULT_CONTRAST: u8;

    fn geometry(&self) -> &'static PanelGeometry;

    /// Send the power-up sequence, ending with the display switched on at `contrast`.
    fn init<DI>(&self, iface: &mut DI, contrast: u8) -> Result<(), Error>
    where
        DI: DisplayInterface;

    /// Point the RAM write pointer at pixel column `x` of `bank`. Data written afterwards
    /// fills the bank left to right from there.
    fn set_address<DI>(&self, iface: &mut DI, bank: u8, x: u8) -> Result<(), Error>
    where
        DI: DisplayInterface;

    /// Set contrast (OLED brightness, LCD operating voltage) on a 0-255 scale.
    fn set_contrast<DI>(&self, iface: &mut DI, level: u8) -> Result<(), Error>
    where
        DI: DisplayInterface;

    /// Switch the panel output on or off. Display RAM is retained while off.
    fn set_display_on<DI>(&self, iface: &mut DI, on: bool) -> Result<(), Error>
    where
        DI: DisplayInterface;
}

/// Reject addresses outside `geometry` before any byte goes out.
pub(crate) fn check_address(geometry: &PanelGeometry, bank: u8, x: u8) -> Result<(), Error> {
    if geometry.contains(bank, x) {
        Ok(())
    } else {
        log::warn!("address bank {}, column {} is outside the panel", bank, x);
        Err(Error::Geometry { bank, column: x })
    }
}
