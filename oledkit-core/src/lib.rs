//! Board-agnostic graphics engine for monochrome page-addressed displays
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Display configuration and validation
//! - The page-organised framebuffer and pixel access
//! - Line, circle and rectangle rasterization
//! - The proportional bitmap font and text layout (normal and double size)
//! - Precomputed circle tables
//! - [`Canvas`], a framebuffer with a text cursor
//!
//! Drawing never fails on geometry: anything off the surface is skipped.
//! The only validated inputs are cursor moves and empty strings.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod config;
pub mod font;
pub mod framebuffer;
#[cfg(feature = "graphics")]
pub mod graphics;
mod raster;
pub mod text;
pub mod trig;

// Re-export key types
pub use canvas::{Canvas, CanvasError};
pub use config::{ConfigError, DisplayConfig};
pub use framebuffer::{Color, Framebuffer};
pub use text::{Cursor, TextSize, TextStyle};
