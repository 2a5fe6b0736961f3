//! In-memory framebuffer
//!
//! The buffer mirrors the controller's display RAM in horizontal addressing
//! mode: one byte per column per 8-row page, pages stored top to bottom.
//!
//! ```text
//!          x=0   x=1   x=2        x=W-1
//! page 0 [ b0  ][ b1  ][ b2  ] .. [ bW-1 ]    rows 0..7
//! page 1 [ bW  ][ bW+1][ ... ] .. [ ...  ]    rows 8..15
//! ```
//!
//! Bit 0 of a byte is the top row of its page.

use heapless::Vec;

use crate::config::{check_dimensions, ConfigError, BUFFER_CAPACITY};

/// Pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel off
    Clear,
    /// Pixel on
    #[default]
    Set,
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::Set
        } else {
            Color::Clear
        }
    }
}

/// Page-organised 1 bit per pixel framebuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u8,
    height: u8,
    bytes: Vec<u8, BUFFER_CAPACITY>,
}

impl Framebuffer {
    /// Allocate a zeroed buffer for a `width` x `height` surface
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        check_dimensions(width, height)?;

        let mut bytes = Vec::new();
        bytes
            .resize(width as usize * (height as usize / 8), 0)
            .map_err(|_| ConfigError::InvalidDimensions)?;

        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Raw buffer contents, in transfer order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether (x, y) lies on the surface
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y)
    }

    /// Zero every byte
    pub fn clear(&mut self) -> &mut Self {
        self.fill(0x00);
        self
    }

    /// Set every byte to `byte`
    pub(crate) fn fill(&mut self, byte: u8) {
        self.bytes.fill(byte);
    }

    /// Set or clear one pixel
    ///
    /// Off-surface coordinates are ignored.
    pub fn plot(&mut self, x: i32, y: i32, color: Color) -> &mut Self {
        if !self.contains(x, y) {
            return self;
        }

        let index = self.index(x as usize, y as usize);
        let mask = 1u8 << (y & 7);
        match color {
            Color::Set => self.bytes[index] |= mask,
            Color::Clear => self.bytes[index] &= !mask,
        }
        self
    }

    /// Read one pixel; off-surface pixels read as clear
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.bytes[self.index(x as usize, y as usize)] & (1 << (y & 7)) != 0
    }

    /// Byte holding pixel (x, y); caller checks bounds
    fn index(&self, x: usize, y: usize) -> usize {
        (y >> 3) * self.width as usize + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_buffer_is_zeroed() {
        let fb = Framebuffer::new(128, 64).unwrap();
        assert_eq!(fb.as_bytes().len(), 1024);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));

        let fb = Framebuffer::new(128, 32).unwrap();
        assert_eq!(fb.as_bytes().len(), 512);
    }

    #[test]
    fn test_rejects_partial_pages() {
        assert_eq!(Framebuffer::new(128, 20), Err(ConfigError::InvalidDimensions));
        assert_eq!(Framebuffer::new(0, 32), Err(ConfigError::InvalidDimensions));
    }

    #[test]
    fn test_plot_addresses_page_and_bit() {
        let mut fb = Framebuffer::new(128, 64).unwrap();

        fb.plot(0, 0, Color::Set);
        assert_eq!(fb.as_bytes()[0], 0x01);

        fb.plot(5, 7, Color::Set);
        assert_eq!(fb.as_bytes()[5], 0x80);

        // Row 9 is bit 1 of page 1
        fb.plot(3, 9, Color::Set);
        assert_eq!(fb.as_bytes()[128 + 3], 0x02);

        fb.plot(127, 63, Color::Set);
        assert_eq!(fb.as_bytes()[1023], 0x80);
    }

    #[test]
    fn test_plot_clear_only_touches_one_bit() {
        let mut fb = Framebuffer::new(128, 32).unwrap();
        fb.plot(10, 2, Color::Set).plot(10, 3, Color::Set);
        fb.plot(10, 2, Color::Clear);

        assert!(!fb.pixel(10, 2));
        assert!(fb.pixel(10, 3));
        assert_eq!(fb.as_bytes()[10], 0x08);
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut fb = Framebuffer::new(128, 64).unwrap();
        for i in 0..64 {
            fb.plot(i * 2, i, Color::Set);
        }
        fb.clear();
        assert_eq!(fb.as_bytes().len(), 128 * 64 / 8);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_color_from_bool() {
        assert_eq!(Color::from(true), Color::Set);
        assert_eq!(Color::from(false), Color::Clear);
        assert_eq!(Color::default(), Color::Set);
    }

    proptest! {
        #[test]
        fn prop_plot_round_trip(x in 0i32..128, y in 0i32..64, seed in any::<u64>()) {
            let mut fb = Framebuffer::new(128, 64).unwrap();
            // Scatter some pixels so the round trip runs on a non-empty buffer
            for i in 0..32 {
                let bits = seed.rotate_left(i * 2);
                fb.plot((bits % 128) as i32, ((bits >> 8) % 64) as i32, Color::Set);
            }
            fb.plot(x, y, Color::Clear);
            let before = fb.clone();

            fb.plot(x, y, Color::Set);
            prop_assert!(fb.pixel(x, y));
            fb.plot(x, y, Color::Clear);
            prop_assert_eq!(fb, before);
        }

        #[test]
        fn prop_off_surface_plot_is_noop(x in -512i32..512, y in -512i32..512) {
            prop_assume!(!(0..128).contains(&x) || !(0..32).contains(&y));
            let mut fb = Framebuffer::new(128, 32).unwrap();
            fb.plot(1, 1, Color::Set);
            let before = fb.clone();

            fb.plot(x, y, Color::Set);
            prop_assert_eq!(&fb, &before);
            fb.plot(x, y, Color::Clear);
            prop_assert_eq!(&fb, &before);
        }
    }
}
