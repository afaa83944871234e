//! Text driver for small monochrome dot matrix panels: the SSD1306 128x64 OLED on I2C and the
//! PCD8544 84x48 LCD (Nokia 5110) on SPI.
//!
//! Text goes in as bytes and comes out as 5x7 glyphs on a character grid. A `DisplaySession`
//! owns one bound panel, serializes access to it, and keeps the last written text for reading
//! back.

#![cfg_attr(not(feature = "std"), no_std)]


pub mod config;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod interface;
pub mod panel;
pub mod render;
pub mod session;
pub mod stream;

// Re-exports for primary API.
pub use config::Config;
pub use error::{Error, TransportError};
pub use geometry::PanelGeometry;
pub use interface::i2c::I2cInterface;
pub use interface::spi::SpiInterface;
pub use interface::DisplayInterface;
pub use panel::{Panel, Pcd8544, Ssd1306};
pub use session::DisplaySession;
pub use stream::{Control, TextStream};
