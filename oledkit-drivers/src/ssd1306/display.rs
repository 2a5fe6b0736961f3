//! SSD1306 display session
//!
//! The session owns the bus, the reset line and a [`Canvas`]. Drawing calls
//! only touch the in-memory framebuffer; [`Ssd1306::draw`] sends the whole
//! buffer to the panel in one write.

use embedded_hal::delay::DelayNs;
use oledkit_core::config::BUFFER_CAPACITY;
use oledkit_core::text::Cursor;
use oledkit_core::{Canvas, Color, DisplayConfig, Framebuffer, TextStyle};
use oledkit_hal::{I2cBus, ResetLine};

use super::cmd::{self, Command};
use super::error::Error;

/// Reset line held high before the pulse (ms)
const RESET_SETTLE_MS: u32 = 1;
/// Reset pulse width (ms)
const RESET_LOW_MS: u32 = 10;

/// SSD1306 OLED session
///
/// Constructing one runs the whole power-on protocol, so an `Ssd1306`
/// value is always ready to draw.
pub struct Ssd1306<I2C, RST> {
    i2c: I2C,
    reset: RST,
    config: DisplayConfig,
    canvas: Canvas,
}

impl<I2C, RST> Ssd1306<I2C, RST>
where
    I2C: I2cBus,
    RST: ResetLine,
{
    /// Reset and configure the panel, then show a blank screen
    ///
    /// The configuration is checked before the reset line or bus is
    /// touched. Any bus failure aborts construction.
    pub fn new<D: DelayNs>(
        i2c: I2C,
        reset: RST,
        delay: &mut D,
        config: DisplayConfig,
    ) -> Result<Self, Error<I2C::Error>> {
        config.validate()?;

        let mut display = Self {
            i2c,
            reset,
            config,
            canvas: Canvas::new(config.width, config.height)?,
        };

        display.hardware_reset(delay);
        for command in cmd::init_sequence(&config) {
            display.command(command)?;
        }
        display.clear().draw()?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "SSD1306 ready at {=u8:#x} ({=u8}x{=u8})",
            config.address,
            config.width,
            config.height
        );

        Ok(display)
    }

    /// Pulse the reset line: high, low, high again
    fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.reset.set(true);
        delay.delay_ms(RESET_SETTLE_MS);
        self.reset.set(false);
        delay.delay_ms(RESET_LOW_MS);
        self.reset.set(true);
    }

    /// Send one command
    fn command(&mut self, command: Command) -> Result<(), Error<I2C::Error>> {
        let (frame, len) = command.frame();
        self.write(&frame[..len])
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.config.address, data).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 bus write failed ({=usize} bytes)", data.len());
            Error::Bus(e)
        })
    }

    /// Transfer the whole framebuffer to display RAM
    pub fn draw(&mut self) -> Result<&mut Self, Error<I2C::Error>> {
        let bytes = self.canvas.buffer().as_bytes();
        let len = bytes.len();

        let mut frame = [0u8; BUFFER_CAPACITY + 1];
        frame[0] = cmd::CONTROL_DATA;
        frame[1..=len].copy_from_slice(bytes);

        self.write(&frame[..=len])?;
        Ok(self)
    }

    /// Swap lit and unlit pixels on the panel (buffer unchanged)
    pub fn set_inverse(&mut self, inverse: bool) -> Result<&mut Self, Error<I2C::Error>> {
        let op = if inverse {
            cmd::INVERT_DISPLAY
        } else {
            cmd::NORMAL_DISPLAY
        };
        self.command(Command::new(op))?;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 inverse: {=bool}", inverse);

        Ok(self)
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<&mut Self, Error<I2C::Error>> {
        self.command(Command::with_arg(cmd::SET_CONTRAST, contrast))?;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 contrast: {=u8}", contrast);

        Ok(self)
    }

    /// Turn the panel on or off; display RAM is kept while off
    pub fn set_power(&mut self, on: bool) -> Result<&mut Self, Error<I2C::Error>> {
        let op = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.command(Command::new(op))?;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 power: {=bool}", on);

        Ok(self)
    }

    /// Move the cursor to (0, 0)
    pub fn home(&mut self) -> &mut Self {
        self.canvas.home();
        self
    }

    /// Move the cursor to (x, y)
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<&mut Self, Error<I2C::Error>> {
        self.canvas.move_to(x, y)?;
        Ok(self)
    }

    /// Set or clear one pixel; off-surface coordinates are ignored
    pub fn plot(&mut self, x: i32, y: i32, color: Color) -> &mut Self {
        self.canvas.plot(x, y, color);
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
        self.canvas.line(x0, y0, x1, y1, thickness, color);
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
        self.canvas.circle(cx, cy, radius, color, filled);
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
        self.canvas.rect(x, y, w, h, color, filled);
        self
    }

    /// Write `text` at the cursor, wrapping at the right edge
    pub fn text(&mut self, text: &str) -> Result<&mut Self, Error<I2C::Error>> {
        self.canvas.text(text)?;
        Ok(self)
    }

    /// Write double-size `text` at the cursor, wrapping at the right edge
    pub fn text_2x(&mut self, text: &str) -> Result<&mut Self, Error<I2C::Error>> {
        self.canvas.text_2x(text)?;
        Ok(self)
    }

    /// Write `text` at the cursor in the given style
    pub fn text_with(
        &mut self,
        text: &str,
        style: TextStyle,
    ) -> Result<&mut Self, Error<I2C::Error>> {
        self.canvas.text_with(text, style)?;
        Ok(self)
    }

    /// Zero the framebuffer (the panel keeps showing the old frame until [`draw`](Self::draw))
    pub fn clear(&mut self) -> &mut Self {
        self.canvas.clear();
        self
    }
}

impl<I2C, RST> Ssd1306<I2C, RST> {
    /// Width in pixels `text` would take at normal size
    pub fn length_of_string(&self, text: &str) -> usize {
        self.canvas.length_of_string(text)
    }

    /// Surface width in pixels
    pub fn width(&self) -> u8 {
        self.config.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> u8 {
        self.config.height
    }

    /// Configuration the session was created with
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.canvas.cursor()
    }

    /// Framebuffer contents as they will be sent by the next draw
    pub fn buffer(&self) -> &Framebuffer {
        self.canvas.buffer()
    }

    /// Drawing surface, for use with external graphics code
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Give back the bus and reset line
    pub fn release(self) -> (I2C, RST) {
        (self.i2c, self.reset)
    }
}
