//! oledkit Hardware Abstraction Layer
//!
//! This crate defines the two capabilities the display driver needs from a
//! board: a way to write addressed bytes onto a two-wire bus, and a way to
//! drive the controller's reset line. Chip HALs can implement the traits
//! directly, or hand over `embedded-hal` 1.0 peripherals through the
//! adapters in each module.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  oledkit-drivers (Ssd1306 session)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oledkit-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  native impls │       │  embedded-hal │
//! │  (I2cBus,     │       │  adapters     │
//! │   OutputPin)  │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - addressed bus writes
//! - [`gpio::OutputPin`] - digital output
//! - [`gpio::ResetLine`] - controller reset line

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{EmbeddedResetPin, OutputPin, PinReset, ResetLine};
pub use i2c::{EmbeddedI2c, I2cBus};
