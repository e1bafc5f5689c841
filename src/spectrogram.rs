//! Spectrogram facade: palette, frequency window and scrolling surface.

use std::collections::HashMap;

use crate::config::SpectrogramConfig;
use crate::error::SpectrogramError;
use crate::palette::Palette;
use crate::surface::{DrawOutcome, DrawSurface, ImageSurface, ScrollingSurface};
use crate::window::FrequencyWindow;

/// Size of a host container in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

/// Host environment that owns the containers spectrograms are placed in.
pub trait Host {
    /// Current size of the container with the given id.
    fn container_size(&self, id: &str) -> Option<ContainerSize>;
}

/// Host with a fixed set of containers.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    containers: HashMap<String, ContainerSize>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a container.
    pub fn with_container(mut self, id: impl Into<String>, width: u32, height: u32) -> Self {
        self.containers
            .insert(id.into(), ContainerSize { width, height });
        self
    }
}

impl Host for StaticHost {
    fn container_size(&self, id: &str) -> Option<ContainerSize> {
        self.containers.get(id).copied()
    }
}

/// Scrolling spectrogram renderer.
///
/// Holds the active palette, frequency window and highlight settings, and
/// forwards each magnitude frame to its [`ScrollingSurface`].
pub struct Spectrogram<S: DrawSurface = ImageSurface> {
    config: SpectrogramConfig,
    palette: Palette,
    window: FrequencyWindow,
    scrolling: ScrollingSurface<S>,
}

impl Spectrogram<ImageSurface> {
    /// Build a spectrogram sized from the host container named by `config.id`.
    pub fn new(config: SpectrogramConfig, host: &impl Host) -> Result<Self, SpectrogramError> {
        config.validate()?;

        let size = host
            .container_size(&config.id)
            .ok_or_else(|| SpectrogramError::MissingContainer(config.id.clone()))?;
        if size.width == 0 {
            return Err(SpectrogramError::EmptyContainer {
                id: config.id.clone(),
            });
        }

        log::debug!(
            "Creating spectrogram '{}' ({}x{} container)",
            config.id,
            size.width,
            size.height
        );
        let surface = ImageSurface::new(size.width, 0, config.background());
        Ok(Self::build(config, surface))
    }

    /// Replace the surface with a blank one `new_width` pixels wide.
    ///
    /// The height is recomputed on the next frame.
    pub fn resize(&mut self, new_width: u32) {
        log::debug!("Resizing spectrogram '{}' to {} px", self.config.id, new_width);
        let surface = ImageSurface::new(new_width, 0, self.config.background());
        self.scrolling.replace_surface(surface);
    }
}

impl<S: DrawSurface> Spectrogram<S> {
    /// Build a spectrogram that draws into a caller-provided surface.
    pub fn with_surface(config: SpectrogramConfig, surface: S) -> Result<Self, SpectrogramError> {
        config.validate()?;
        Ok(Self::build(config, surface))
    }

    fn build(config: SpectrogramConfig, surface: S) -> Self {
        let palette = config.palette_kind().build(config.dark_mode);
        let window = config.frequency_window();
        Self {
            config,
            palette,
            window,
            scrolling: ScrollingSurface::new(surface),
        }
    }

    /// Scroll and paint one magnitude frame.
    pub fn draw_frame(&mut self, frame: &[u8], sample_rate: f32) -> DrawOutcome {
        let threshold = self
            .config
            .highlight_peaks
            .then_some(self.config.highlight_threshold_percent);
        self.scrolling
            .draw(frame, sample_rate, &self.window, &self.palette, threshold)
    }

    /// Switch between the heat-map and grayscale palettes.
    pub fn update_colors(&mut self, use_heat_map: bool) {
        self.config.use_heat_map_colors = use_heat_map;
        self.palette = self.config.palette_kind().build(self.config.dark_mode);
        log::debug!("Palette set to {}", self.config.palette_kind().name());
    }

    pub fn update_highlight_peaks(&mut self, highlight_peaks: bool) {
        self.config.highlight_peaks = highlight_peaks;
    }

    /// Change the upper frequency bound. The surface height stays locked.
    pub fn update_maximum_frequency(&mut self, hz: f32) {
        self.config.max_frequency_hz = hz;
        self.window.max_hz = hz;
    }

    /// Change the lower frequency bound. The surface height stays locked.
    pub fn update_minimum_frequency(&mut self, hz: f32) {
        self.config.min_frequency_hz = hz;
        self.window.min_hz = hz;
    }

    /// Recompute the surface height from the current window on the next frame.
    pub fn refresh_canvas_height(&mut self) {
        self.scrolling.refresh_height();
    }

    pub fn pause(&mut self) {
        self.scrolling.pause();
    }

    pub fn resume(&mut self) {
        self.scrolling.resume();
    }

    pub fn is_paused(&self) -> bool {
        !self.scrolling.is_active()
    }

    pub fn config(&self) -> &SpectrogramConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn window(&self) -> &FrequencyWindow {
        &self.window
    }

    pub fn surface(&self) -> &S {
        self.scrolling.surface()
    }

    pub fn is_height_locked(&self) -> bool {
        self.scrolling.is_height_locked()
    }
}
