//! The command set of the PCD8544 84x48 LCD controller used on Nokia 5110 modules.
//!
//! The PCD8544 has two instruction sets sharing opcode space. `FunctionSet` selects between
//! them, and the temperature coefficient, bias and Vop commands are only understood while the
//! extended set is active. Every command is a single byte.

use super::{check_address, Panel};
use crate::error::Error;
use crate::geometry::{PanelGeometry, PCD8544};
use crate::interface::DisplayInterface;

pub const X_MAX: u8 = 83;
pub const BANK_MAX: u8 = 5;
pub const VOP_MAX: u8 = 127;

/// Which instruction set subsequent commands are decoded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionSet {
    Basic,
    Extended,
}

/// Direction the RAM write pointer advances after each data byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    /// X increments, then Y at the end of a bank.
    Horizontal,
    /// Y increments, then X after the last bank.
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// All segments off.
    Blank,
    /// All segments on.
    AllOn,
    /// Show display RAM.
    Normal,
    /// Show display RAM inverted.
    Inverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Power down the chip, choose the addressing mode and the instruction set. Valid in both
    /// instruction sets.
    FunctionSet {
        power_down: bool,
        addressing: AddressingMode,
        instructions: InstructionSet,
    },
    /// Basic set: select the display mode.
    SetDisplayMode(DisplayMode),
    /// Basic set: move the RAM pointer to a bank. Range 0-5.
    SetYAddress(u8),
    /// Basic set: move the RAM pointer to a pixel column. Range 0-83.
    SetXAddress(u8),
    /// Extended set: temperature coefficient of the LCD voltage. Range 0-3.
    SetTemperatureCoefficient(u8),
    /// Extended set: bias system (multiplex rate). Range 0-7.
    SetBias(u8),
    /// Extended set: operating voltage, which sets contrast. Range 0-127.
    SetVop(u8),
}

impl Command {
    /// The basic instruction set with the chip powered and horizontal addressing.
    pub fn basic() -> Self {
        Command::FunctionSet {
            power_down: false,
            addressing: AddressingMode::Horizontal,
            instructions: InstructionSet::Basic,
        }
    }

    /// The extended instruction set with the chip powered and horizontal addressing.
    pub fn extended() -> Self {
        Command::FunctionSet {
            power_down: false,
            addressing: AddressingMode::Horizontal,
            instructions: InstructionSet::Extended,
        }
    }

    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 1];
        let bytes: Result<&[u8], Error> = match self {
            Command::FunctionSet {
                power_down,
                addressing,
                instructions,
            } => {
                let pd = if power_down { 0x04 } else { 0x00 };
                let v = match addressing {
                    AddressingMode::Horizontal => 0x00,
                    AddressingMode::Vertical => 0x02,
                };
                let h = match instructions {
                    InstructionSet::Basic => 0x00,
                    InstructionSet::Extended => 0x01,
                };
                ok_command!(arg_buf, 0x20 | pd | v | h, [])
            }
            Command::SetDisplayMode(mode) => ok_command!(
                arg_buf,
                match mode {
                    DisplayMode::Blank => 0x08,
                    DisplayMode::AllOn => 0x09,
                    DisplayMode::Normal => 0x0C,
                    DisplayMode::Inverse => 0x0D,
                },
                []
            ),
            Command::SetYAddress(bank) => match bank {
                0..=BANK_MAX => ok_command!(arg_buf, 0x40 | bank, []),
                _ => Err(Error::Parameter),
            },
            Command::SetXAddress(x) => match x {
                0..=X_MAX => ok_command!(arg_buf, 0x80 | x, []),
                _ => Err(Error::Parameter),
            },
            Command::SetTemperatureCoefficient(tc) => match tc {
                0..=3 => ok_command!(arg_buf, 0x04 | tc, []),
                _ => Err(Error::Parameter),
            },
            Command::SetBias(bias) => match bias {
                0..=7 => ok_command!(arg_buf, 0x10 | bias, []),
                _ => Err(Error::Parameter),
            },
            Command::SetVop(vop) => match vop {
                0..=VOP_MAX => ok_command!(arg_buf, 0x80 | vop, []),
                _ => Err(Error::Parameter),
            },
        };
        for &byte in bytes? {
            iface.send_command(byte)?;
        }
        Ok(())
    }
}

/// Map a 0-255 contrast level onto the 7-bit Vop range.
fn vop_for(level: u8) -> u8 {
    level >> 1
}

/// A Nokia 5110 style 84x48 PCD8544 module.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pcd8544;

impl Panel for Pcd8544 {
    const NAME: &'static str = "pcd8544";
    // Vop 0x31, which suits most Nokia 5110 modules at room temperature.
    const DEFAULT_CONTRAST: u8 = 0x62;

    fn geometry(&self) -> &'static PanelGeometry {
        &PCD8544
    }

    fn init<DI>(&self, iface: &mut DI, contrast: u8) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        Command::extended().send(iface)?;
        Command::SetVop(vop_for(contrast)).send(iface)?;
        Command::SetTemperatureCoefficient(0).send(iface)?;
        Command::SetBias(4).send(iface)?;
        Command::basic().send(iface)?;
        Command::SetDisplayMode(DisplayMode::Normal).send(iface)
    }

    fn set_address<DI>(&self, iface: &mut DI, bank: u8, x: u8) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        check_address(self.geometry(), bank, x)?;
        Command::SetYAddress(bank).send(iface)?;
        Command::SetXAddress(x).send(iface)
    }

    fn set_contrast<DI>(&self, iface: &mut DI, level: u8) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        Command::extended().send(iface)?;
        Command::SetVop(vop_for(level)).send(iface)?;
        Command::basic().send(iface)
    }

    fn set_display_on<DI>(&self, iface: &mut DI, on: bool) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        if on {
            Command::basic().send(iface)?;
            Command::SetDisplayMode(DisplayMode::Normal).send(iface)
        } else {
            Command::FunctionSet {
                power_down: true,
                addressing: AddressingMode::Horizontal,
                instructions: InstructionSet::Basic,
            }
            .send(iface)
        }
    }
}
