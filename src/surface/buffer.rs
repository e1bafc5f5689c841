//! In-memory drawing surface backed by an `image::RgbaImage`.

use image::{Pixel, RgbaImage};

use super::DrawSurface;
use crate::palette::Color;

/// RGBA pixel grid with a fixed background color.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbaImage,
    background: Color,
}

impl ImageSurface {
    /// Create a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            background,
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Underlying pixel buffer, for presenting the surface.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at `(column, row)`, if inside the grid.
    pub fn pixel(&self, column: u32, row: u32) -> Option<Color> {
        if column < self.image.width() && row < self.image.height() {
            Some(*self.image.get_pixel(column, row))
        } else {
            None
        }
    }

    /// Copy of a single column, top to bottom.
    pub fn column(&self, column: u32) -> Vec<Color> {
        (0..self.image.height())
            .filter_map(|row| self.pixel(column, row))
            .collect()
    }
}

impl DrawSurface for ImageSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn reallocate(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::from_pixel(width, height, self.background);
    }

    fn fill_pixel(&mut self, column: u32, row: u32, color: Color) {
        if column >= self.image.width() || row >= self.image.height() {
            return;
        }
        let pixel = self.image.get_pixel_mut(column, row);
        if color[3] == 255 {
            *pixel = color;
        } else {
            pixel.blend(&color);
        }
    }

    fn shift_left_by_one(&mut self) {
        let width = self.image.width() as usize;
        if width == 0 {
            return;
        }

        // Rows are contiguous, so each row shifts as one slice rotation.
        let row_len = width * 4;
        let background = self.background.0;
        for row in self.image.chunks_exact_mut(row_len) {
            row.copy_within(4.., 0);
            row[row_len - 4..].copy_from_slice(&background);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const BG: Color = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_new_surface_is_background() {
        let surface = ImageSurface::new(4, 3, BG);
        assert_eq!(surface.width(), 4);
        assert_eq!(surface.height(), 3);
        assert!(surface.image().pixels().all(|p| *p == BG));
    }

    #[test]
    fn test_fill_pixel_out_of_bounds_is_ignored() {
        let mut surface = ImageSurface::new(2, 2, BG);
        surface.fill_pixel(2, 0, Rgba([255, 255, 255, 255]));
        surface.fill_pixel(0, 2, Rgba([255, 255, 255, 255]));
        assert!(surface.image().pixels().all(|p| *p == BG));
    }

    #[test]
    fn test_fill_pixel_blends_translucent_color() {
        let mut surface = ImageSurface::new(1, 1, BG);
        surface.fill_pixel(0, 0, Rgba([255, 0, 0, 128]));

        let pixel = surface.pixel(0, 0).unwrap();
        assert!(pixel[0] > 100 && pixel[0] < 160);
        assert_eq!(pixel[1], 0);
        assert_eq!(pixel[2], 0);
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn test_shift_left_by_one() {
        let mut surface = ImageSurface::new(3, 2, BG);
        let a = Rgba([1, 1, 1, 255]);
        let b = Rgba([2, 2, 2, 255]);
        surface.fill_pixel(0, 0, a);
        surface.fill_pixel(2, 1, b);

        surface.shift_left_by_one();

        // Column 0 was discarded
        assert_eq!(surface.pixel(0, 0), Some(BG));
        assert_eq!(surface.pixel(1, 1), Some(b));
        assert_eq!(surface.column(2), vec![BG, BG]);
    }

    #[test]
    fn test_reallocate_clears() {
        let mut surface = ImageSurface::new(3, 2, BG);
        surface.fill_pixel(1, 1, Rgba([9, 9, 9, 255]));
        surface.reallocate(5, 4);

        assert_eq!(surface.width(), 5);
        assert_eq!(surface.height(), 4);
        assert!(surface.image().pixels().all(|p| *p == BG));
    }
}
