//! Drawing surface with a text cursor
//!
//! [`Canvas`] bundles a [`Framebuffer`] with the cursor used by text
//! rendering. Every drawing call mutates the buffer in memory and returns
//! the canvas so calls can be chained:
//!
//! ```
//! use oledkit_core::{Canvas, Color};
//!
//! let mut canvas = Canvas::new(128, 32).unwrap();
//! canvas
//!     .clear()
//!     .rect(0, 0, 128, 32, Color::Set, false)
//!     .move_to(4, 4)
//!     .unwrap()
//!     .text("Ready")
//!     .unwrap();
//! ```

use crate::config::ConfigError;
use crate::framebuffer::{Color, Framebuffer};
use crate::text::{draw_text, length_of_string, Cursor, TextStyle};

/// Errors from the validated canvas operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// Cursor target outside the surface
    OutOfRange,
    /// Empty string passed to a text operation
    InvalidArgument,
}

/// Framebuffer plus text cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    buffer: Framebuffer,
    cursor: Cursor,
}

impl Canvas {
    /// Create a blank `width` x `height` canvas with the cursor at home
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            buffer: Framebuffer::new(width, height)?,
            cursor: Cursor::default(),
        })
    }

    /// Surface width in pixels
    pub fn width(&self) -> u8 {
        self.buffer.width()
    }

    /// Surface height in pixels
    pub fn height(&self) -> u8 {
        self.buffer.height()
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The framebuffer being drawn into
    pub fn buffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// Mutable framebuffer access, for drawing with external libraries
    pub fn buffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.buffer
    }

    /// Move the cursor to (0, 0)
    pub fn home(&mut self) -> &mut Self {
        self.cursor = Cursor::default();
        self
    }

    /// Move the cursor to (x, y)
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<&mut Self, CanvasError> {
        if !self.buffer.contains(x, y) {
            return Err(CanvasError::OutOfRange);
        }
        self.cursor = Cursor::new(x, y);
        Ok(self)
    }

    /// Zero the framebuffer; the cursor stays where it is
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// Set or clear one pixel; off-surface coordinates are ignored
    pub fn plot(&mut self, x: i32, y: i32, color: Color) -> &mut Self {
        self.buffer.plot(x, y, color);
        self
    }

    /// Draw a line, end point excluded; see [`Framebuffer::line`]
    pub fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: u32,
        color: Color,
    ) -> &mut Self {
        self.buffer.line(x0, y0, x1, y1, thickness, color);
        self
    }

    /// Draw a circle outline or fan-filled disc; see [`Framebuffer::circle`]
    pub fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
        filled: bool,
    ) -> &mut Self {
        self.buffer.circle(cx, cy, radius, color, filled);
        self
    }

    /// Draw a clipped rectangle, outline or filled
    pub fn rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        filled: bool,
    ) -> &mut Self {
        self.buffer.rect(x, y, w, h, color, filled);
        self
    }

    /// Write `text` at the cursor, wrapping at the right edge
    pub fn text(&mut self, text: &str) -> Result<&mut Self, CanvasError> {
        self.text_with(text, TextStyle::NORMAL)
    }

    /// Write double-size `text` at the cursor, wrapping at the right edge
    pub fn text_2x(&mut self, text: &str) -> Result<&mut Self, CanvasError> {
        self.text_with(text, TextStyle::DOUBLE)
    }

    /// Write `text` at the cursor in the given style and advance the cursor
    pub fn text_with(&mut self, text: &str, style: TextStyle) -> Result<&mut Self, CanvasError> {
        if text.is_empty() {
            return Err(CanvasError::InvalidArgument);
        }
        self.cursor = draw_text(&mut self.buffer, self.cursor, text, style);
        Ok(self)
    }

    /// Width in pixels `text` would take at normal size
    pub fn length_of_string(&self, text: &str) -> usize {
        length_of_string(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_blank_at_home() {
        let canvas = Canvas::new(128, 64).unwrap();
        assert_eq!(canvas.cursor(), Cursor::new(0, 0));
        assert_eq!(canvas.buffer().as_bytes().len(), 1024);
        assert!(canvas.buffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalid_size_is_config_error() {
        assert_eq!(Canvas::new(128, 12), Err(ConfigError::InvalidDimensions));
    }

    #[test]
    fn test_move_out_of_range() {
        let mut canvas = Canvas::new(128, 64).unwrap();
        assert_eq!(canvas.move_to(128, 0).err(), Some(CanvasError::OutOfRange));
        assert_eq!(canvas.move_to(0, 64).err(), Some(CanvasError::OutOfRange));
        assert_eq!(canvas.move_to(-1, 0).err(), Some(CanvasError::OutOfRange));

        // Still usable afterwards
        canvas.move_to(127, 63).unwrap();
        assert_eq!(canvas.cursor(), Cursor::new(127, 63));
        canvas.home();
        assert_eq!(canvas.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_empty_text_is_invalid() {
        let mut canvas = Canvas::new(128, 32).unwrap();
        assert_eq!(canvas.text("").err(), Some(CanvasError::InvalidArgument));
        assert_eq!(canvas.text_2x("").err(), Some(CanvasError::InvalidArgument));
        assert_eq!(canvas.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn test_text_2x_advances_cursor() {
        let mut canvas = Canvas::new(128, 64).unwrap();
        canvas.text_2x("A").unwrap();
        assert_eq!(canvas.cursor(), Cursor::new(12, 0));
    }

    #[test]
    fn test_consecutive_text_calls_continue() {
        let mut joined = Canvas::new(128, 32).unwrap();
        joined.text("ab").unwrap();

        let mut split = Canvas::new(128, 32).unwrap();
        split.text("a").unwrap().text("b").unwrap();

        assert_eq!(joined.buffer(), split.buffer());
        assert_eq!(joined.cursor(), split.cursor());
    }

    #[test]
    fn test_chaining_and_clear() {
        let mut canvas = Canvas::new(128, 64).unwrap();
        canvas
            .plot(1, 1, Color::Set)
            .line(0, 10, 50, 10, 1, Color::Set)
            .circle(64, 32, 8, Color::Set, true)
            .rect(100, 40, 10, 10, Color::Set, false);
        assert!(canvas.buffer().pixel(1, 1));
        assert!(canvas.buffer().pixel(64, 32));

        canvas.move_to(5, 5).unwrap();
        canvas.clear();
        assert!(canvas.buffer().as_bytes().iter().all(|&b| b == 0));
        assert_eq!(canvas.cursor(), Cursor::new(5, 5));
    }

    #[test]
    fn test_length_of_string_does_not_draw() {
        let canvas = Canvas::new(128, 32).unwrap();
        assert_eq!(canvas.length_of_string(""), 0);
        assert_eq!(canvas.length_of_string("OK"), 12);
        assert!(canvas.buffer().as_bytes().iter().all(|&b| b == 0));
        assert_eq!(canvas.cursor(), Cursor::new(0, 0));
    }
}
