//! Proportional text layout
//!
//! Glyphs are drawn column by column from the cursor position, one spacing
//! column after each character (four when doubled). Text can wrap onto the
//! next character row; when there is no row left it is cut off quietly.
//!
//! Double-size text stretches every glyph bit into two, then fills in one
//! pixel on each diagonal step between neighbouring columns so enlarged
//! slopes do not turn into staircases.

use crate::font::glyph;
use crate::framebuffer::{Color, Framebuffer};

/// Glyph scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 8 pixel rows, 1 pixel spacing
    #[default]
    Normal,
    /// 16 pixel rows, 4 pixel spacing
    Double,
}

impl TextSize {
    /// Height of one character row in pixels
    pub const fn line_height(self) -> i32 {
        match self {
            TextSize::Normal => 8,
            TextSize::Double => 16,
        }
    }

    /// Blank columns after each character
    pub const fn spacing(self) -> i32 {
        match self {
            TextSize::Normal => 1,
            TextSize::Double => 4,
        }
    }

    /// Pixels per glyph column
    pub const fn scale(self) -> i32 {
        match self {
            TextSize::Normal => 1,
            TextSize::Double => 2,
        }
    }
}

/// How a string is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Glyph scale
    pub size: TextSize,
    /// Continue on the next character row at the right edge
    pub wrap: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TextStyle {
    /// Normal size, wrapping
    pub const NORMAL: Self = Self {
        size: TextSize::Normal,
        wrap: true,
    };

    /// Double size, wrapping
    pub const DOUBLE: Self = Self {
        size: TextSize::Double,
        wrap: true,
    };

    /// Same style without wrapping
    pub const fn no_wrap(self) -> Self {
        Self { wrap: false, ..self }
    }
}

/// Text cursor, top-left of the next glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width in pixels of `text` at normal size, spacing included
pub fn length_of_string(text: &str) -> usize {
    text.chars().map(|ch| glyph(ch).len() + 1).sum()
}

/// Reverse the bit order of a glyph column (font is top-is-MSB, buffer is top-is-bit-0)
pub fn flip(column: u8) -> u8 {
    column.reverse_bits()
}

/// Pixel-double an 8 bit column into 16 bits
pub fn stretch(column: u8) -> u16 {
    let mut x = column as u16;
    x = ((x & 0xF0) << 4) | (x & 0x0F);
    x = ((x << 2) | x) & 0x3333;
    x = ((x << 1) | x) & 0x5555;
    x | (x << 1)
}

/// Doubled columns for a pair of neighbouring glyph columns
///
/// Returns `[left_left, left_right, right_left, right_right]`. Where a two
/// bit window steps diagonally between `left` and `right` (`10` next to
/// `01`, or `01` next to `10`) one pixel is added on each side of the step.
fn smooth_pair(left: u8, right: u8) -> [u16; 4] {
    let left_left = stretch(left);
    let mut left_right = left_left;
    let mut right_left = stretch(right);
    let right_right = right_left;

    for a in (0..=6).rev() {
        for b in 1..=2u8 {
            if (left >> a) & 3 == 3 - b && (right >> a) & 3 == b {
                left_right |= 1 << (a * 2 + b);
                right_left |= 1 << (a * 2 + 3 - b);
            }
        }
    }

    [left_left, left_right, right_left, right_right]
}

/// Pen position while laying out one string
struct Pen {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    line_height: i32,
    wrap: bool,
}

impl Pen {
    /// Move to the start of the next character row if there is one
    fn next_row(&mut self) -> bool {
        if self.y + self.line_height < self.height {
            self.x = 0;
            self.y += self.line_height;
            true
        } else {
            false
        }
    }

    /// Advance `columns` pixels; false once rendering has to stop
    fn advance(&mut self, columns: i32) -> bool {
        self.x += columns;
        if self.x < self.width {
            return true;
        }
        self.wrap && self.next_row()
    }
}

/// Set the pixels of one (possibly doubled) column whose top is at (x, y)
fn draw_column(buffer: &mut Framebuffer, x: i32, y: i32, bits: u16, rows: i32) {
    for k in 0..rows {
        if bits & (1 << k) != 0 {
            buffer.plot(x, y + k, Color::Set);
        }
    }
}

/// Lay out `text` from `cursor` and return where the next glyph would go
///
/// The returned cursor always lies on the surface. Glyph pixels are only
/// ever set, never cleared.
pub fn draw_text(buffer: &mut Framebuffer, cursor: Cursor, text: &str, style: TextStyle) -> Cursor {
    let size = style.size;
    let rows = size.line_height();
    let mut pen = Pen {
        x: cursor.x,
        y: cursor.y,
        width: buffer.width() as i32,
        height: buffer.height() as i32,
        line_height: rows,
        wrap: style.wrap,
    };

    'chars: for ch in text.chars() {
        let columns = glyph(ch);

        if pen.wrap && pen.x + columns.len() as i32 * size.scale() >= pen.width && !pen.next_row() {
            break;
        }

        match size {
            TextSize::Normal => {
                for &column in columns {
                    draw_column(buffer, pen.x, pen.y, flip(column) as u16, rows);
                    if !pen.advance(1) {
                        break 'chars;
                    }
                }
            }
            TextSize::Double => {
                if let [single] = columns {
                    let doubled = stretch(flip(*single));
                    draw_column(buffer, pen.x, pen.y, doubled, rows);
                    draw_column(buffer, pen.x + 1, pen.y, doubled, rows);
                }
                for pair in columns.windows(2) {
                    let doubled = smooth_pair(flip(pair[0]), flip(pair[1]));
                    for (offset, bits) in (0..).zip(doubled) {
                        draw_column(buffer, pen.x + offset, pen.y, bits, rows);
                    }
                    if !pen.advance(2) {
                        break 'chars;
                    }
                }
            }
        }

        if !pen.advance(size.spacing()) {
            break;
        }
    }

    Cursor::new(pen.x.min(pen.width - 1), pen.y)
}
