//! Transports that carry command and data bytes to a panel controller.
//!
//! Both panel families need to tell the controller whether a byte is a command or pixel data.
//! The I2C family does it with a control byte in front of every payload byte, the SPI family
//! with a dedicated D/C line. A `DisplayInterface` hides which one is in use.

use crate::error::TransportError;

pub trait DisplayInterface {
    /// Send one controller command byte.
    fn send_command(&mut self, cmd: u8) -> Result<(), TransportError>;
    /// Send one byte of display RAM data.
    fn send_data(&mut self, data: u8) -> Result<(), TransportError>;
}

pub mod i2c {
    //! The I2C interface frames every byte as a two-byte write: a control byte (0x00 for a
    //! command, 0x40 for data) followed by the payload.

    use embedded_hal::i2c::{Error as _, I2c};
    use log::warn;

    use super::DisplayInterface;
    use crate::error::TransportError;

    /// Usual 7-bit address of SSD1306 modules (0x3D with the SA0 pad pulled high).
    pub const DEFAULT_ADDRESS: u8 = 0x3C;

    const COMMAND_PREFIX: u8 = 0x00;
    const DATA_PREFIX: u8 = 0x40;

    pub struct I2cInterface<I2C> {
        /// The I2C bus the panel is attached to.
        i2c: I2C,
        /// 7-bit target address of the panel.
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: I2c,
    {
        /// Create a new I2C interface talking to the controller at `address`.
        pub fn new(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }

        /// Give back the bus.
        pub fn release(self) -> I2C {
            self.i2c
        }

        fn framed(&mut self, prefix: u8, byte: u8) -> Result<(), TransportError> {
            self.i2c.write(self.address, &[prefix, byte]).map_err(|e| {
                warn!(
                    "i2c write of {:#04x} (prefix {:#04x}) to {:#04x} failed: {:?}",
                    byte,
                    prefix,
                    self.address,
                    e.kind()
                );
                TransportError::Bus
            })
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: I2c,
    {
        fn send_command(&mut self, cmd: u8) -> Result<(), TransportError> {
            self.framed(COMMAND_PREFIX, cmd)
        }

        fn send_data(&mut self, data: u8) -> Result<(), TransportError> {
            self.framed(DATA_PREFIX, data)
        }
    }

}

pub mod spi {
    //! The SPI interface uses the "4-wire" mode of the controller: each word on the bus is 8
    //! bits, and a GPIO drives the D/C pin low for commands and high for data.

    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::OutputPin;
    use embedded_hal::spi::SpiDevice;
    use log::warn;

    use super::DisplayInterface;
    use crate::error::TransportError;

    /// How long the reset line is held in each state during `hardware_reset`.
    const RESET_HOLD_MS: u32 = 10;

    pub struct SpiInterface<SPI, DC> {
        /// The SPI device (bus plus chip select) connected to the controller.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the controller.
        dc: DC,
    }

    impl<SPI, DC> SpiInterface<SPI, DC>
    where
        SPI: SpiDevice,
        DC: OutputPin,
    {
        /// Create a new SPI interface to communicate with the display controller. `spi` is the
        /// SPI device, and `dc` is the GPIO output pin connected to the D/C pin.
        pub fn new(spi: SPI, dc: DC) -> Self {
            Self { spi, dc }
        }

        /// Give back the SPI device and the D/C pin.
        pub fn release(self) -> (SPI, DC) {
            (self.spi, self.dc)
        }

        fn write_byte(&mut self, byte: u8) -> Result<(), TransportError> {
            self.spi.write(&[byte]).map_err(|_| {
                warn!("spi write of {:#04x} failed", byte);
                TransportError::Bus
            })
        }
    }

    impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
    where
        SPI: SpiDevice,
        DC: OutputPin,
    {
        fn send_command(&mut self, cmd: u8) -> Result<(), TransportError> {
            self.dc.set_low().map_err(|_| {
                warn!("could not drive D/C low for command {:#04x}", cmd);
                TransportError::ModeSelect
            })?;
            self.write_byte(cmd)
        }

        fn send_data(&mut self, data: u8) -> Result<(), TransportError> {
            self.dc.set_high().map_err(|_| {
                warn!("could not drive D/C high for data {:#04x}", data);
                TransportError::ModeSelect
            })?;
            self.write_byte(data)
        }
    }

    /// Pulse the active-low reset line of the controller: low for 10 ms, then high for 10 ms
    /// before the first command may be sent.
    pub fn hardware_reset<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), TransportError>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        rst.set_low().map_err(|_| TransportError::Reset)?;
        delay.delay_ms(RESET_HOLD_MS);
        rst.set_high().map_err(|_| TransportError::Reset)?;
        delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }

}
