//! Color palettes for mapping bin magnitudes to pixels.
//!
//! A [`Palette`] is an ordered, immutable list of opaque colors. Magnitudes are
//! expressed as a percentage (0-100) and mapped onto the palette by
//! [`Palette::lookup`]. Two builders are provided:
//! - Grayscale: 50 shades following a sinusoidal brightness curve
//! - HeatMap: 100 colors blended through background, purple, blue, green, orange and red

use std::f32::consts::PI;

use image::Rgba;

/// An RGBA color. Palette entries are always fully opaque.
pub type Color = Rgba<u8>;

/// Number of entries in a grayscale palette.
pub const GRAYSCALE_SIZE: usize = 50;

/// Number of entries in a heat-map palette.
pub const HEAT_MAP_SIZE: usize = 100;

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];
const BLUE: [u8; 3] = [0, 0, 255];
const GREEN: [u8; 3] = [0, 170, 0];
const ORANGE: [u8; 3] = [255, 170, 0];
const RED: [u8; 3] = [255, 0, 0];

/// Build an opaque color from an RGB triple.
pub fn opaque([r, g, b]: [u8; 3]) -> Color {
    Rgba([r, g, b, 255])
}

/// Background color used behind the spectrogram.
pub fn background(dark_mode: bool) -> Color {
    opaque(if dark_mode { BLACK } else { WHITE })
}

/// Ordered, immutable color sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Wrap a list of colors. Returns `None` for an empty list.
    pub fn from_colors(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    /// Grayscale palette of [`GRAYSCALE_SIZE`] shades.
    ///
    /// Brightness follows a sine curve starting from its minimum, so quiet
    /// bins stay close to the background. Light mode inverts every shade.
    pub fn grayscale(dark_mode: bool) -> Self {
        let step = PI / GRAYSCALE_SIZE as f32;
        let amplitude = 127.0;
        let center = 128.0;
        let phase = (PI / 2.0) * 3.1;

        let colors = (0..GRAYSCALE_SIZE)
            .map(|i| {
                let v = ((step * i as f32 + phase).sin() * amplitude + center) as u8;
                let v = if dark_mode { v } else { 255 - v };
                opaque([v, v, v])
            })
            .collect();

        Self { colors }
    }

    /// Heat-map palette of [`HEAT_MAP_SIZE`] colors.
    ///
    /// Concatenates five gradients (15, 35, 10, 20 and 20 steps) through the
    /// stops background → purple → blue → green → orange → red.
    pub fn heat_map(dark_mode: bool) -> Self {
        let background = if dark_mode { BLACK } else { WHITE };
        let purple = if dark_mode { [64, 0, 64] } else { [125, 0, 125] };

        let segments = [
            (background, purple, 15),
            (purple, BLUE, 35),
            (BLUE, GREEN, 10),
            (GREEN, ORANGE, 20),
            (ORANGE, RED, 20),
        ];

        let mut colors = Vec::with_capacity(HEAT_MAP_SIZE);
        for (from, to, steps) in segments {
            colors.extend(gradient(from, to, steps));
        }

        Self { colors }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes hold at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn first(&self) -> Color {
        self.colors[0]
    }

    pub fn last(&self) -> Color {
        self.colors[self.colors.len() - 1]
    }

    /// Map a magnitude percentage to a color.
    ///
    /// The percentage is clamped to 0..=100 (NaN counts as 0) and the index is
    /// `floor(percent / 100 * (len - 1))`.
    pub fn lookup(&self, percent: f32) -> Color {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        let last = self.colors.len() - 1;
        let index = ((percent / 100.0) * last as f32).floor() as usize;
        self.colors[index.min(last)]
    }
}

/// Linear gradient of `steps` colors, both endpoints included.
fn gradient(from: [u8; 3], to: [u8; 3], steps: usize) -> Vec<Color> {
    if steps == 1 {
        return vec![opaque(from)];
    }

    (0..steps)
        .map(|i| {
            let t = i as f32 / (steps - 1) as f32;
            let channel = |c: usize| {
                let start = from[c] as f32;
                let end = to[c] as f32;
                (start + t * (end - start)).round() as u8
            };
            opaque([channel(0), channel(1), channel(2)])
        })
        .collect()
}

/// Available palette types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Grayscale,
    HeatMap,
}

impl PaletteKind {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grayscale" | "greyscale" | "gray" | "grey" | "default" => Some(Self::Grayscale),
            "heat-map" | "heatmap" | "heat" => Some(Self::HeatMap),
            _ => None,
        }
    }

    /// Kind selected by the `use_heat_map_colors` flag.
    pub fn from_heat_map_flag(use_heat_map: bool) -> Self {
        if use_heat_map {
            Self::HeatMap
        } else {
            Self::Grayscale
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::HeatMap => "heat-map",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Grayscale, Self::HeatMap]
    }

    /// Build the palette for this kind.
    pub fn build(&self, dark_mode: bool) -> Palette {
        match self {
            Self::Grayscale => Palette::grayscale(dark_mode),
            Self::HeatMap => Palette::heat_map(dark_mode),
        }
    }
}
