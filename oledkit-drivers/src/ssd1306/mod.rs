//! SSD1306 OLED controller
//!
//! Every bus write is framed as a control byte followed by its payload:
//!
//! ```text
//! ┌──────────┬──────────────────────────┐
//! │ 0x00     │ command [+ parameters]   │   command stream
//! ├──────────┼──────────────────────────┤
//! │ 0x40     │ framebuffer bytes (W*H/8)│   display data
//! └──────────┴──────────────────────────┘
//! ```
//!
//! The controller runs in horizontal addressing mode with the column and
//! page windows covering the whole panel, so a single data write refreshes
//! the full display.

pub mod cmd;
mod display;
mod error;

pub use display::Ssd1306;
pub use error::Error;
