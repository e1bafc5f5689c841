//! Waterfall Core
//!
//! Scrolling spectrogram renderer: turns a stream of byte magnitude frames
//! into color-mapped pixel columns that scroll across a fixed-width surface.
//!
//! # Features
//!
//! - Grayscale and heat-map palettes with percentage lookup
//! - Frequency window mapping a Hz range onto bin indices and pixel rows
//! - Strict local-maximum peak detection with translucent highlights
//! - Height-locked scrolling surface over a pluggable [`DrawSurface`]
//! - Tick-driven [`RenderLoop`] pulling frames from an [`AnalysisSource`]
//! - FFT byte-frequency analyser (RustFFT) and synthetic test signals
//!
//! # Example
//! ```
//! use waterfall::{Spectrogram, SpectrogramConfig, StaticHost};
//!
//! let host = StaticHost::new().with_container("spectrogram", 320, 240);
//! let mut spectrogram = Spectrogram::new(SpectrogramConfig::default(), &host).unwrap();
//!
//! spectrogram.draw_frame(&[128u8; 1024], 44100.0);
//! assert!(spectrogram.is_height_locked());
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod palette;
pub mod peaks;
pub mod render;
pub mod spectrogram;
pub mod surface;
pub mod window;

// Re-export commonly used types
pub use audio::{AnalysisSource, AnalyzerError, ByteFrequencyAnalyser, SpectrumAnalyzer};
pub use config::SpectrogramConfig;
pub use error::{ConfigError, SpectrogramError};
pub use palette::{Color, Palette, PaletteKind};
pub use peaks::{find_highlights, is_peak, HighlightPixel};
pub use render::{RenderLoop, Scheduler, TickBudget};
pub use spectrogram::{ContainerSize, Host, Spectrogram, StaticHost};
pub use surface::{DrawOutcome, DrawSurface, ImageSurface, ScrollingSurface};
pub use window::{compute_range, FrequencyWindow, IndexRange, DEFAULT_UPPER_INDEX_CAP};
