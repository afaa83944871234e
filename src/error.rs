//! Error types shared by the transport, the render engine and the session.

use thiserror::Error;

/// A failure of the physical bus or one of its control lines. The in-progress operation is
/// abandoned; whatever was already drawn stays on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The bus did not accept a byte (NACK, timeout, bus fault).
    #[error("bus transfer failed")]
    Bus,
    /// The D/C line could not be driven to the command or data level.
    #[error("mode select line could not be driven")]
    ModeSelect,
    /// The reset line could not be driven.
    #[error("reset line could not be driven")]
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// A bank or pixel column outside the panel was addressed.
    #[error("bank {bank}, column {column} is outside the panel")]
    Geometry { bank: u8, column: u8 },
    /// A command argument outside the range the controller accepts.
    #[error("command argument out of range")]
    Parameter,
    #[error("text buffer overflow")]
    BufferOverflow,
}

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Error::Transport(_) => embedded_io::ErrorKind::Other,
            Error::Geometry { .. } | Error::Parameter => embedded_io::ErrorKind::InvalidInput,
            Error::BufferOverflow => embedded_io::ErrorKind::OutOfMemory,
        }
    }
}
