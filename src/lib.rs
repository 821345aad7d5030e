//! termglyph library crate.
//!
//! Renders raster images in the terminal as colored Unicode glyphs. Each
//! 4x8 pixel block becomes one character cell whose glyph and two colors
//! best reproduce the block.
//!
//! This module exposes the internal components for integration testing.

pub mod block;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod image_io;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod transform;

pub use error::{Error, Result};
