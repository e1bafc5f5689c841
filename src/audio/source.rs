//! Analysis sources that feed magnitude frames to the render loop.
//!
//! A source reports its bin count and sample rate and fills one byte frame
//! (0-255 per bin) per tick, the way a Web Audio analyser node does.

use super::fft::SpectrumAnalyzer;

/// Error type for analysis source construction.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("FFT size must be a power of 2, got {0}")]
    InvalidFftSize(usize),
    #[error("Decibel range is empty: min {min} dB must be below max {max} dB")]
    InvalidDecibelRange { min: f32, max: f32 },
    #[error("Hop size must be at least 1 sample")]
    InvalidHopSize,
}

/// Producer of byte magnitude frames.
pub trait AnalysisSource {
    /// Number of frequency bins per frame.
    fn bin_count(&self) -> usize;

    /// Sample rate of the analysed signal in Hz.
    fn sample_rate(&self) -> f32;

    /// Write the current frame into `frame`, one magnitude per bin.
    ///
    /// `frame` has `bin_count()` elements; a source that can produce fewer
    /// leaves the remainder at zero.
    fn fill_frame(&mut self, frame: &mut [u8]);
}

/// Default lower bound of the decibel range mapped onto 0..=255.
pub const DEFAULT_MIN_DECIBELS: f32 = -100.0;

/// Default upper bound of the decibel range mapped onto 0..=255.
pub const DEFAULT_MAX_DECIBELS: f32 = -30.0;

/// Byte-frequency analyser over an in-memory mono sample buffer.
///
/// Each frame analyses `fft_size` samples starting at the read position and
/// then advances by `hop_size`. Magnitudes are converted to decibels and
/// mapped linearly from `[min_db, max_db]` onto `0..=255`. Once the buffer is
/// exhausted the analyser produces silence.
pub struct ByteFrequencyAnalyser {
    analyzer: SpectrumAnalyzer,
    samples: Vec<f32>,
    sample_rate: u32,
    hop_size: usize,
    position: usize,
    min_db: f32,
    max_db: f32,
}

impl ByteFrequencyAnalyser {
    pub fn new(
        samples: Vec<f32>,
        sample_rate: u32,
        fft_size: usize,
        hop_size: usize,
    ) -> Result<Self, AnalyzerError> {
        if hop_size == 0 {
            return Err(AnalyzerError::InvalidHopSize);
        }
        Ok(Self {
            analyzer: SpectrumAnalyzer::new(fft_size)?,
            samples,
            sample_rate,
            hop_size,
            position: 0,
            min_db: DEFAULT_MIN_DECIBELS,
            max_db: DEFAULT_MAX_DECIBELS,
        })
    }

    /// Override the decibel range mapped onto byte magnitudes.
    pub fn with_decibel_range(mut self, min_db: f32, max_db: f32) -> Result<Self, AnalyzerError> {
        if !(min_db < max_db) {
            return Err(AnalyzerError::InvalidDecibelRange {
                min: min_db,
                max: max_db,
            });
        }
        self.min_db = min_db;
        self.max_db = max_db;
        Ok(self)
    }

    pub fn fft_size(&self) -> usize {
        self.analyzer.fft_size()
    }

    /// Read position in samples.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once the read position has passed the end of the buffer.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.samples.len()
    }

    fn to_byte(&self, db: f32) -> u8 {
        let scaled = (db - self.min_db) / (self.max_db - self.min_db) * 255.0;
        scaled.clamp(0.0, 255.0) as u8
    }
}

impl AnalysisSource for ByteFrequencyAnalyser {
    fn bin_count(&self) -> usize {
        self.analyzer.num_bins()
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate as f32
    }

    fn fill_frame(&mut self, frame: &mut [u8]) {
        frame.fill(0);
        if self.is_exhausted() {
            return;
        }

        let start = self.position;
        let end = (start + self.fft_size()).min(self.samples.len());
        let spectrum = self.analyzer.analyze_db(&self.samples[start..end], self.min_db);
        self.position += self.hop_size;

        for (byte, db) in frame.iter_mut().zip(spectrum) {
            *byte = self.to_byte(db);
        }
    }
}
