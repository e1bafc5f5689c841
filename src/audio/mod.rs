//! Audio analysis sources.
//!
//! This module provides:
//! - The [`AnalysisSource`] trait the render loop pulls magnitude frames from
//! - A byte-frequency analyser over in-memory samples via RustFFT
//! - Synthetic test signals

pub mod fft;
pub mod source;
pub mod synth;

pub use fft::SpectrumAnalyzer;
pub use source::{
    AnalysisSource, AnalyzerError, ByteFrequencyAnalyser, DEFAULT_MAX_DECIBELS,
    DEFAULT_MIN_DECIBELS,
};
pub use synth::{generate_click_track, generate_sine, generate_sweep, generate_white_noise, mix};
