//! Drawing surfaces.
//!
//! This module provides:
//! - The [`DrawSurface`] capability trait the scrolling renderer draws through
//! - An in-memory [`ImageSurface`] backed by an `image::RgbaImage`
//! - The [`ScrollingSurface`] that shifts and paints one column per frame

mod buffer;
mod scrolling;

pub use buffer::ImageSurface;
pub use scrolling::{DrawOutcome, ScrollingSurface};

use crate::palette::Color;

/// Minimal pixel-grid capabilities needed by the scrolling renderer.
///
/// Coordinates are `(column, row)` with `(0, 0)` at the top-left. Writes that
/// fall outside the grid are ignored, as on a canvas.
pub trait DrawSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Replace the grid with a blank one of the given size.
    fn reallocate(&mut self, width: u32, height: u32);

    /// Paint a pixel, compositing translucent colors over the existing one.
    fn fill_pixel(&mut self, column: u32, row: u32, color: Color);

    /// Move every column one pixel to the left.
    ///
    /// The leftmost column is discarded and the rightmost column is cleared.
    fn shift_left_by_one(&mut self);
}
