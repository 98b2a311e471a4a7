//! Frame rendering module for converting video frames to terminal text.
//!
//! This module provides the per-frame pipeline used by the player:
//!
//! 1. **Geometry** - Fit the source aspect ratio into the terminal once
//! 2. **Resize** - Linear resampling of each frame to the cell grid
//! 3. **Colorize** - One true-color escape sequence plus two glyphs per cell
//!
//! # Glyphs
//!
//! Cell glyphs are chosen by [`GlyphPolicy`]:
//! - `RandomLowercase` - a random `a`-`z` letter per cell (default)
//! - `Fixed` - the same ASCII glyph for every cell

mod colorize;
mod geometry;
mod glyph;
mod resize;

pub use colorize::{encode_frame, frame_capacity, GLYPHS_PER_CELL, MAX_CELL_LEN};
pub use geometry::Geometry;
pub use glyph::{GlyphPicker, GlyphPolicy};
pub use resize::resize_frame;
