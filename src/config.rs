//! Bring-up configuration for a display session.

/// A configuration for binding a panel. Builder methods offer a declarative way to either set a
/// value at bind time, or to leave it at the panel's default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub(crate) contrast: Option<u8>,
    pub(crate) banner: Option<&'static [u8]>,
    pub(crate) farewell: Option<&'static [u8]>,
}

impl Config {
    /// Create a new configuration with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend this `Config` to explicitly set the contrast level (0-255) sent during
    /// initialization. See `Panel::set_contrast`.
    pub fn contrast(self, level: u8) -> Self {
        Self {
            contrast: Some(level),
            ..self
        }
    }

    /// Extend this `Config` with text rendered once the panel is up, such as a ready message.
    /// The banner is not kept for read-back.
    pub fn banner(self, text: &'static [u8]) -> Self {
        Self {
            banner: Some(text),
            ..self
        }
    }

    /// Extend this `Config` with text shown while the panel is being unbound. Only used by
    /// `DisplaySession::unbind_with_farewell`, which needs a delay provider to hold it on screen.
    pub fn farewell(self, text: &'static [u8]) -> Self {
        Self {
            farewell: Some(text),
            ..self
        }
    }
}
