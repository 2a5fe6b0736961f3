//! Driver errors

use oledkit_core::{CanvasError, ConfigError};

/// SSD1306 driver errors
///
/// `E` is the error type of the bus the display is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Invalid address or panel size; the session was not created
    Config(ConfigError),
    /// Cursor target outside the surface
    OutOfRange,
    /// Empty string passed to a text operation
    InvalidArgument,
    /// Bus write failed
    Bus(E),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl<E> From<CanvasError> for Error<E> {
    fn from(e: CanvasError) -> Self {
        match e {
            CanvasError::OutOfRange => Error::OutOfRange,
            CanvasError::InvalidArgument => Error::InvalidArgument,
        }
    }
}
