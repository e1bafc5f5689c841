//! FFT spectrum analysis using RustFFT.
//!
//! Provides the magnitude spectra behind [`ByteFrequencyAnalyser`](super::ByteFrequencyAnalyser).

use rustfft::{num_complex::Complex, FftPlanner};

use super::source::AnalyzerError;

/// Spectrum analyzer for audio data.
///
/// Uses FFT to convert time-domain audio samples to a frequency-domain
/// magnitude spectrum.
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f32>,
    fft_size: usize,
    window: Vec<f32>,
}

impl SpectrumAnalyzer {
    /// Create a new spectrum analyzer with the given FFT size.
    ///
    /// Common FFT sizes: 512, 1024, 2048, 4096
    /// Larger sizes give better frequency resolution but worse time resolution.
    pub fn new(fft_size: usize) -> Result<Self, AnalyzerError> {
        if fft_size < 2 || !fft_size.is_power_of_two() {
            return Err(AnalyzerError::InvalidFftSize(fft_size));
        }

        // Hann window reduces spectral leakage
        let window: Vec<f32> = (0..fft_size)
            .map(|i| {
                let t = i as f32 / (fft_size - 1) as f32;
                0.5 * (1.0 - (2.0 * std::f32::consts::PI * t).cos())
            })
            .collect();

        Ok(Self {
            planner: FftPlanner::new(),
            fft_size,
            window,
        })
    }

    /// FFT size being used.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of frequency bins in the output (FFT size / 2).
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }

    /// Compute magnitude spectrum from audio samples.
    ///
    /// Returns `fft_size / 2` magnitudes from 0 Hz up to Nyquist. Input shorter
    /// than the FFT size is zero-padded; extra samples are ignored.
    pub fn analyze(&mut self, samples: &[f32]) -> Vec<f32> {
        let mut buffer: Vec<Complex<f32>> = self
            .window
            .iter()
            .enumerate()
            .map(|(i, w)| Complex::new(samples.get(i).copied().unwrap_or(0.0) * w, 0.0))
            .collect();

        let fft = self.planner.plan_fft_forward(self.fft_size);
        fft.process(&mut buffer);

        buffer[..self.fft_size / 2]
            .iter()
            .map(|c| c.norm() / self.fft_size as f32)
            .collect()
    }

    /// Compute spectrum in decibels (dB).
    ///
    /// Silent bins are floored at `floor_db`.
    pub fn analyze_db(&mut self, samples: &[f32], floor_db: f32) -> Vec<f32> {
        self.analyze(samples)
            .iter()
            .map(|&mag| (20.0 * mag.max(1e-10).log10()).max(floor_db))
            .collect()
    }

    /// Get the frequency in Hz for a given bin index.
    pub fn bin_to_freq(&self, bin: usize, sample_rate: u32) -> f32 {
        bin as f32 * sample_rate as f32 / self.fft_size as f32
    }

    /// Get the bin index for a given frequency in Hz.
    pub fn freq_to_bin(&self, freq: f32, sample_rate: u32) -> usize {
        (freq * self.fft_size as f32 / sample_rate as f32).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::synth::generate_sine;

    #[test]
    fn test_spectrum_analyzer_creation() {
        let analyzer = SpectrumAnalyzer::new(1024).unwrap();
        assert_eq!(analyzer.fft_size(), 1024);
        assert_eq!(analyzer.num_bins(), 512);
    }

    #[test]
    fn test_invalid_fft_size() {
        assert!(matches!(
            SpectrumAnalyzer::new(1000),
            Err(AnalyzerError::InvalidFftSize(1000))
        ));
        assert!(SpectrumAnalyzer::new(0).is_err());
    }

    #[test]
    fn test_sine_wave_spectrum() {
        let sample_rate = 44100;
        let freq = 440.0; // A4 note
        let samples = generate_sine(freq, sample_rate, 0.1, 1.0);

        let mut analyzer = SpectrumAnalyzer::new(2048).unwrap();
        let spectrum = analyzer.analyze(&samples);
        assert_eq!(spectrum.len(), 1024);

        let peak_bin = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();

        let peak_freq = analyzer.bin_to_freq(peak_bin, sample_rate);
        assert!(
            (peak_freq - freq).abs() < 50.0,
            "Expected peak near {} Hz, got {} Hz",
            freq,
            peak_freq
        );
    }

    #[test]
    fn test_short_input_is_zero_padded() {
        let mut analyzer = SpectrumAnalyzer::new(256).unwrap();
        let spectrum = analyzer.analyze(&[0.0; 10]);
        assert_eq!(spectrum.len(), 128);
        assert!(spectrum.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_analyze_db_floor() {
        let mut analyzer = SpectrumAnalyzer::new(512).unwrap();
        let db = analyzer.analyze_db(&[0.0; 512], -100.0);
        assert!(db.iter().all(|&v| v == -100.0));
    }

    #[test]
    fn test_bin_freq_conversion() {
        let analyzer = SpectrumAnalyzer::new(2048).unwrap();
        let sample_rate = 44100;

        let nyquist_bin = analyzer.freq_to_bin(sample_rate as f32 / 2.0, sample_rate);
        assert_eq!(nyquist_bin, 1024);

        let bin = analyzer.freq_to_bin(1000.0, sample_rate);
        let freq = analyzer.bin_to_freq(bin, sample_rate);
        assert!((freq - 1000.0).abs() < 50.0);
    }
}
