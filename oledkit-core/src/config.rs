//! Display configuration types
//!
//! A [`DisplayConfig`] names the bus address and surface size of one panel.
//! It is validated once, when a canvas or session is built from it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bus address of the controller
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternative bus address (address-select pin pulled high)
pub const ALT_ADDRESS: u8 = 0x3D;

/// Highest valid 7-bit bus address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Widest surface the controller RAM can hold
pub const MAX_WIDTH: usize = 128;

/// Tallest surface the controller RAM can hold
pub const MAX_HEIGHT: usize = 64;

/// Rows per page
pub const PAGE_HEIGHT: usize = 8;

/// Bytes needed for the largest surface
pub const BUFFER_CAPACITY: usize = MAX_WIDTH * MAX_HEIGHT / PAGE_HEIGHT;

/// Configuration errors, reported before any bus traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address does not fit in 7 bits
    InvalidAddress,
    /// Zero-sized surface, height not a whole number of pages, or larger than controller RAM
    InvalidDimensions,
}

/// Check that a `width` x `height` surface fits controller RAM in whole pages
pub fn check_dimensions(width: u8, height: u8) -> Result<(), ConfigError> {
    let (width, height) = (width as usize, height as usize);
    if width == 0 || height == 0 || height % PAGE_HEIGHT != 0 {
        return Err(ConfigError::InvalidDimensions);
    }
    if width > MAX_WIDTH || height > MAX_HEIGHT {
        return Err(ConfigError::InvalidDimensions);
    }
    Ok(())
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Width in pixels
    pub width: u8,
    /// Height in pixels (multiple of 8)
    pub height: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::SIZE_128X32
    }
}

impl DisplayConfig {
    /// 128x32 panel at the default address
    pub const SIZE_128X32: Self = Self {
        address: DEFAULT_ADDRESS,
        width: 128,
        height: 32,
    };

    /// 128x64 panel at the default address
    pub const SIZE_128X64: Self = Self {
        address: DEFAULT_ADDRESS,
        width: 128,
        height: 64,
    };

    /// Create a configuration (not yet validated)
    pub const fn new(address: u8, width: u8, height: u8) -> Self {
        Self {
            address,
            width,
            height,
        }
    }

    /// Same panel at a different bus address
    pub const fn with_address(self, address: u8) -> Self {
        Self { address, ..self }
    }

    /// Check address and dimensions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address > MAX_ADDRESS {
            return Err(ConfigError::InvalidAddress);
        }
        check_dimensions(self.width, self.height)
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> usize {
        self.height as usize / PAGE_HEIGHT
    }

    /// Framebuffer length in bytes
    pub const fn buffer_len(&self) -> usize {
        self.width as usize * self.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_128x32_at_0x3c() {
        let config = DisplayConfig::default();
        assert_eq!(config.address, 0x3C);
        assert_eq!((config.width, config.height), (128, 32));
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.buffer_len(), 512);
    }

    #[test]
    fn test_128x64_fills_controller_ram() {
        let config = DisplayConfig::SIZE_128X64.with_address(ALT_ADDRESS);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.pages(), 8);
        assert_eq!(config.buffer_len(), BUFFER_CAPACITY);
    }

    #[test]
    fn test_address_must_fit_seven_bits() {
        assert_eq!(DisplayConfig::new(0x7F, 128, 32).validate(), Ok(()));
        assert_eq!(
            DisplayConfig::new(0x80, 128, 32).validate(),
            Err(ConfigError::InvalidAddress)
        );
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(0, 32), (128, 0), (128, 30), (129, 32), (128, 72)] {
            assert_eq!(
                DisplayConfig::new(DEFAULT_ADDRESS, w, h).validate(),
                Err(ConfigError::InvalidDimensions),
                "{}x{}",
                w,
                h
            );
        }
    }

    #[test]
    fn test_small_panels_are_valid() {
        assert_eq!(DisplayConfig::new(0x3C, 64, 48).validate(), Ok(()));
        assert_eq!(DisplayConfig::new(0x3C, 96, 16).validate(), Ok(()));
    }
}
