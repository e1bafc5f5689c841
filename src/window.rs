//! Frequency window: maps a configured frequency range onto frame bin indices.

/// Default ceiling for the upper bin index.
///
/// The value matches a 44.1 kHz Nyquist frequency but is used as an index
/// cap, independent of the frame's bin count.
pub const DEFAULT_UPPER_INDEX_CAP: usize = 22050;

/// Inclusive range of bin indices covered by the frequency window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub min_index: usize,
    pub max_index: usize,
}

impl IndexRange {
    /// Number of pixel rows the range maps to.
    pub fn height(&self) -> usize {
        self.max_index - self.min_index
    }

    /// Indices that exist in a frame of `len` bins.
    pub fn clipped_to(&self, len: usize) -> std::ops::RangeInclusive<usize> {
        let end = self.max_index.min(len.saturating_sub(1));
        self.min_index..=end
    }
}

/// Map a frequency range to bin indices.
///
/// Returns `None` for an empty frame, a non-positive or non-finite sample
/// rate, non-finite bounds, or `min_hz > max_hz`. Callers treat `None` as a
/// no-op draw.
pub fn compute_range(
    min_hz: f32,
    max_hz: f32,
    sample_rate: f32,
    bin_count: usize,
    upper_cap: usize,
) -> Option<IndexRange> {
    if bin_count == 0 || !sample_rate.is_finite() || sample_rate <= 0.0 {
        return None;
    }
    if !min_hz.is_finite() || !max_hz.is_finite() || min_hz > max_hz {
        return None;
    }

    let nyquist = sample_rate / 2.0;
    let scale = |hz: f32| hz / nyquist * bin_count as f32;

    let min_index = scale(min_hz).floor().max(0.0) as usize;
    let min_index = min_index.min(bin_count - 1);

    let max_index = scale(max_hz).ceil().max(0.0) as usize;
    let max_index = max_index.min(upper_cap);

    if min_index > max_index {
        return None;
    }

    Some(IndexRange {
        min_index,
        max_index,
    })
}

/// Frequency of a bin, with the last bin at Nyquist.
pub fn bin_to_frequency(index: usize, bin_count: usize, sample_rate: f32) -> f32 {
    if bin_count < 2 {
        return 0.0;
    }
    index as f32 / (bin_count - 1) as f32 * (sample_rate / 2.0)
}

/// Configured frequency bounds plus the index ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyWindow {
    pub min_hz: f32,
    pub max_hz: f32,
    pub upper_index_cap: usize,
}

impl Default for FrequencyWindow {
    fn default() -> Self {
        Self {
            min_hz: 0.0,
            max_hz: 22050.0,
            upper_index_cap: DEFAULT_UPPER_INDEX_CAP,
        }
    }
}

impl FrequencyWindow {
    pub fn new(min_hz: f32, max_hz: f32, upper_index_cap: usize) -> Self {
        Self {
            min_hz,
            max_hz,
            upper_index_cap,
        }
    }

    /// Index range for a frame of `bin_count` bins at `sample_rate`.
    pub fn range(&self, sample_rate: f32, bin_count: usize) -> Option<IndexRange> {
        compute_range(
            self.min_hz,
            self.max_hz,
            sample_rate,
            bin_count,
            self.upper_index_cap,
        )
    }

    /// Pixel height for a frame; 0 when the range is empty.
    pub fn height(&self, sample_rate: f32, bin_count: usize) -> usize {
        self.range(sample_rate, bin_count)
            .map(|r| r.height())
            .unwrap_or(0)
    }
}
