//! Spectral peak detection and highlight overlay.

use image::Rgba;

use crate::palette::Color;
use crate::window::IndexRange;

/// Largest byte magnitude a frame can hold.
pub const MAGNITUDE_MAX: f32 = 255.0;

/// Magnitude percentage above which peaks are highlighted.
pub const DEFAULT_HIGHLIGHT_THRESHOLD_PERCENT: f32 = 75.0;

/// True when `frame[i]` is strictly greater than both neighbours.
///
/// The first and last bins are never peaks, and neither are plateaus.
pub fn is_peak(frame: &[u8], i: usize) -> bool {
    if i == 0 || i + 1 >= frame.len() {
        return false;
    }
    frame[i] > frame[i - 1] && frame[i] > frame[i + 1]
}

/// Byte magnitude as a percentage of [`MAGNITUDE_MAX`].
pub fn magnitude_percent(magnitude: u8) -> f32 {
    magnitude as f32 / MAGNITUDE_MAX * 100.0
}

/// Opacity of a peak highlight, 0.0 at the threshold rising to 1.0 at 100%.
pub fn highlight_alpha(percent: f32, threshold: f32) -> f32 {
    ((percent - threshold) / (100.0 - threshold)).clamp(0.0, 1.0)
}

/// A single translucent pixel painted over the newest column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightPixel {
    pub bin: usize,
    pub row: usize,
    pub color: Color,
}

/// Peaks above `threshold` within `range`, positioned at row `height - bin`.
///
/// Unlike the magnitude column, the row is not offset by `range.min_index`;
/// bins that land above the top of the surface are dropped.
pub fn find_highlights(
    frame: &[u8],
    range: IndexRange,
    height: usize,
    threshold: f32,
) -> Vec<HighlightPixel> {
    if frame.is_empty() {
        return Vec::new();
    }

    range
        .clipped_to(frame.len())
        .filter_map(|bin| {
            let percent = magnitude_percent(frame[bin]);
            if percent <= threshold || !is_peak(frame, bin) {
                return None;
            }
            let row = height.checked_sub(bin)?;
            let alpha = highlight_alpha(percent, threshold);
            Some(HighlightPixel {
                bin,
                row,
                color: Rgba([255, 0, 0, (alpha * 255.0).round() as u8]),
            })
        })
        .collect()
}
