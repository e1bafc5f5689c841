//! Spectrogram configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::{self, Color, PaletteKind};
use crate::peaks::DEFAULT_HIGHLIGHT_THRESHOLD_PERCENT;
use crate::window::{FrequencyWindow, DEFAULT_UPPER_INDEX_CAP};

/// Construction options for a [`Spectrogram`](crate::Spectrogram).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    /// Id of the host container the surface is sized from.
    pub id: String,
    /// Heat-map palette instead of grayscale.
    pub use_heat_map_colors: bool,
    /// Overlay strong spectral peaks in red.
    pub highlight_peaks: bool,
    /// Dark background with bright magnitudes (inverted when false).
    pub dark_mode: bool,
    pub min_frequency_hz: f32,
    pub max_frequency_hz: f32,
    /// Magnitude percentage a peak must exceed to be highlighted.
    pub highlight_threshold_percent: f32,
    /// Ceiling for the upper bin index of the frequency window.
    pub upper_index_cap: usize,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            id: "spectrogram".to_string(),
            use_heat_map_colors: true,
            highlight_peaks: false,
            dark_mode: true,
            min_frequency_hz: 0.0,
            max_frequency_hz: 22050.0,
            highlight_threshold_percent: DEFAULT_HIGHLIGHT_THRESHOLD_PERCENT,
            upper_index_cap: DEFAULT_UPPER_INDEX_CAP,
        }
    }
}

impl SpectrogramConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the options the renderer cannot degrade around.
    ///
    /// Frequency bounds are not checked; an inverted or out-of-range window
    /// produces skipped draws.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.highlight_threshold_percent;
        if !(0.0..100.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        if self.upper_index_cap == 0 {
            return Err(ConfigError::InvalidUpperIndexCap);
        }
        Ok(())
    }

    pub fn palette_kind(&self) -> PaletteKind {
        PaletteKind::from_heat_map_flag(self.use_heat_map_colors)
    }

    pub fn background(&self) -> Color {
        palette::background(self.dark_mode)
    }

    pub fn frequency_window(&self) -> FrequencyWindow {
        FrequencyWindow::new(
            self.min_frequency_hz,
            self.max_frequency_hz,
            self.upper_index_cap,
        )
    }
}
