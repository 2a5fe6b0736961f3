//! Display driver implementations
//!
//! This crate provides concrete drivers that put an `oledkit-core`
//! framebuffer on real hardware:
//!
//! - SSD1306 monochrome OLED controller over I2C

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ssd1306;

pub use ssd1306::{Error, Ssd1306};
