//! Scrolling spectrogram surface.
//!
//! Displays a time-frequency representation where:
//! - X-axis represents time (scrolling left, newest column on the right)
//! - Y-axis represents frequency (low bins at the bottom, high at the top)
//! - Color represents magnitude at that time-frequency point

use super::DrawSurface;
use crate::palette::Palette;
use crate::peaks::{find_highlights, magnitude_percent};
use crate::window::FrequencyWindow;

/// What a call to [`ScrollingSurface::draw`] did to the pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The image scrolled and a new column was painted.
    Drawn,
    /// Drawing is paused; the buffer is untouched.
    Paused,
    /// The frame or frequency range was unusable; the buffer is untouched.
    Skipped,
}

/// Pixel surface that scrolls one column per frame.
///
/// The surface height is derived from the frequency window on the first
/// frame and then held until [`refresh_height`](Self::refresh_height) is
/// called, even if the window changes in between.
pub struct ScrollingSurface<S: DrawSurface> {
    surface: S,
    height_locked: bool,
    active: bool,
}

impl<S: DrawSurface> ScrollingSurface<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            height_locked: false,
            active: true,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Swap in a new surface and clear the height lock.
    pub fn replace_surface(&mut self, surface: S) -> S {
        self.height_locked = false;
        std::mem::replace(&mut self.surface, surface)
    }

    pub fn is_height_locked(&self) -> bool {
        self.height_locked
    }

    /// Let the next frame recompute the surface height.
    pub fn refresh_height(&mut self) {
        self.height_locked = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop mutating the buffer. Height locking still happens.
    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn resume(&mut self) {
        self.active = true;
    }

    /// Scroll the image one column and paint `frame` into the rightmost one.
    ///
    /// With `highlight_threshold` set, peaks louder than the threshold
    /// percentage are overlaid in translucent red.
    pub fn draw(
        &mut self,
        frame: &[u8],
        sample_rate: f32,
        window: &FrequencyWindow,
        palette: &Palette,
        highlight_threshold: Option<f32>,
    ) -> DrawOutcome {
        let range = window.range(sample_rate, frame.len());

        if !self.height_locked {
            if let Some(range) = range {
                let width = self.surface.width();
                self.surface.reallocate(width, range.height() as u32);
                self.height_locked = true;
                log::debug!(
                    "Locked spectrogram height at {} rows (bins {}..={})",
                    range.height(),
                    range.min_index,
                    range.max_index
                );
            }
        }

        if !self.active {
            return DrawOutcome::Paused;
        }

        let range = match range {
            Some(range) if !frame.is_empty() => range,
            _ => {
                log::debug!(
                    "Skipping frame: {} bins at {} Hz gives no drawable range",
                    frame.len(),
                    sample_rate
                );
                return DrawOutcome::Skipped;
            }
        };

        let width = self.surface.width();
        let height = self.surface.height() as usize;
        if width == 0 || height == 0 {
            return DrawOutcome::Skipped;
        }

        self.surface.shift_left_by_one();

        let column = width - 1;
        for bin in range.clipped_to(frame.len()) {
            // A locked height can be shorter than a widened window
            let Some(row) = height.checked_sub(bin - range.min_index) else {
                continue;
            };
            let color = palette.lookup(magnitude_percent(frame[bin]));
            self.surface.fill_pixel(column, row as u32, color);
        }

        if let Some(threshold) = highlight_threshold {
            for highlight in find_highlights(frame, range, height, threshold) {
                self.surface
                    .fill_pixel(column, highlight.row as u32, highlight.color);
            }
        }

        DrawOutcome::Drawn
    }
}
