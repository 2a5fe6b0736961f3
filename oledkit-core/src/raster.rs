//! Line, circle and rectangle rasterization
//!
//! Every primitive draws through [`Framebuffer::plot`], so any part of a
//! shape that falls off the surface is dropped pixel by pixel and the rest
//! is still drawn. No primitive fails on bad geometry.

use crate::framebuffer::{Color, Framebuffer};
use crate::trig::{self, CIRCLE_SAMPLES};

/// Round half away from zero
fn round(value: f32) -> i64 {
    if value >= 0.0 {
        (value + 0.5) as i64
    } else {
        (value - 0.5) as i64
    }
}

/// Clamp the span `[from, to)` to `[0, limit)`
///
/// Coordinates are widened so spans reaching past `i32` never overflow;
/// the result always fits the surface.
fn clip(from: i64, to: i64, limit: u8) -> core::ops::Range<i32> {
    let from = from.clamp(0, i64::from(limit)) as i32;
    let to = to.clamp(0, i64::from(limit)) as i32;
    from..to
}

impl Framebuffer {
    /// Draw a line from (x0, y0) towards (x1, y1)
    ///
    /// The line walks its major axis from the lower to the higher
    /// coordinate, stopping one short of the end point, and places the
    /// minor coordinate with a slope computed once. `thickness` repeats the
    /// walk shifted one pixel further along the minor axis each time.
    /// A zero-length line draws nothing.
    pub fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: u32,
        color: Color,
    ) -> &mut Self {
        let passes = i64::from(thickness.max(1));

        if x0 != x1 {
            // x-major: walk columns left to right
            let ((sx, sy), (ex, ey)) = if x0 <= x1 {
                ((x0, y0), (x1, y1))
            } else {
                ((x1, y1), (x0, y0))
            };
            let (sx, sy, ex, ey) = (i64::from(sx), i64::from(sy), i64::from(ex), i64::from(ey));
            let m = (ey - sy) as f32 / (ex - sx) as f32;

            for i in clip(sx, ex, self.width()) {
                let y = sy + (m * (i64::from(i) - sx) as f32) as i64;
                for row in clip(y, y + passes, self.height()) {
                    self.plot(i, row, color);
                }
            }
        } else if y0 != y1 {
            // y-major: walk rows top to bottom
            let ((sx, sy), (ex, ey)) = if y0 <= y1 {
                ((x0, y0), (x1, y1))
            } else {
                ((x1, y1), (x0, y0))
            };
            let (sx, sy, ex, ey) = (i64::from(sx), i64::from(sy), i64::from(ex), i64::from(ey));
            let m = (ex - sx) as f32 / (ey - sy) as f32;

            for i in clip(sy, ey, self.height()) {
                let x = sx + (m * (i64::from(i) - sy) as f32) as i64;
                for col in clip(x, x + passes, self.width()) {
                    self.plot(col, i, color);
                }
            }
        }
        self
    }

    /// Draw a circle of `radius` around (cx, cy)
    ///
    /// The outline is 180 samples at 2° steps. A filled circle also runs a
    /// horizontal span from the centre column to every sample (fan fill).
    /// Small circles can show gaps between samples.
    pub fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
        filled: bool,
    ) -> &mut Self {
        let r = radius as f32;
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let height = i64::from(self.height());

        for i in 0..CIRCLE_SAMPLES {
            let (h, v) = trig::sample(i);
            let x = cx - round(r * h);
            let y = cy - round(r * v);
            if !(0..height).contains(&y) {
                continue;
            }
            let row = y as i32;

            for col in clip(x, x + 1, self.width()) {
                self.plot(col, row, color);
            }

            if filled {
                let span = if x > cx {
                    clip(cx, x, self.width())
                } else {
                    clip(x + 1, cx + 1, self.width())
                };
                for col in span {
                    self.plot(col, row, color);
                }
            }
        }
        self
    }

    /// Draw a `w` x `h` rectangle with its top-left corner at (x, y)
    ///
    /// A negative origin is moved onto the surface and the size is cut so
    /// the rectangle ends at the surface edge. The outline form fills the
    /// rectangle and clears every pixel strictly inside it.
    pub fn rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        filled: bool,
    ) -> &mut Self {
        let x = x.max(0);
        let y = y.max(0);
        let w = w.min(self.width() as i32 - x);
        let h = h.min(self.height() as i32 - y);
        if w <= 0 || h <= 0 {
            return self;
        }

        for row in y..y + h {
            for col in x..x + w {
                self.plot(col, row, color);
                let interior = x < col && col < x + w - 1 && y < row && row < y + h - 1;
                if !filled && interior {
                    self.plot(col, row, Color::Clear);
                }
            }
        }
        self
    }
}
