//! Luminance, contrast and distance between colors

use super::rgb::{Color, ColorError};

/// Euclidean distance between black and white, `sqrt(3) * 255`
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// sRGB channel (0..=255) to linear light
fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0.0, 1.0].
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Contrast as `(L_darker + 0.05) / (L_lighter + 0.05)`.
///
/// Range is (0.0, 1.0]: 1.0 means equal luminance, and black on white
/// gives the minimum of 1/21. Thresholds are "met" when this value is
/// greater than or equal to the minimum.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (darker, lighter) = if la <= lb { (la, lb) } else { (lb, la) };
    (darker + 0.05) / (lighter + 0.05)
}

/// Conventional WCAG ratio in [1.0, 21.0], for display.
pub fn wcag_ratio(a: Color, b: Color) -> f64 {
    1.0 / contrast_ratio(a, b)
}

/// Straight-line distance in RGB space over raw channel values.
pub fn euclidean_distance(a: Color, b: Color) -> f64 {
    a.channels()
        .iter()
        .zip(b.channels())
        .map(|(&x, y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Per-channel complement
pub fn anti_color(color: Color) -> Color {
    Color::rgb(255 - color.r, 255 - color.g, 255 - color.b)
}

/// Complement of a `#rrggbb` string.
pub fn anti_color_hex(hex: &str) -> Result<Color, ColorError> {
    Color::from_hex(hex).map(anti_color)
}

/// Distance and contrast between two colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub distance: f64,
    pub contrast: f64,
}

pub fn color_metrics(a: Color, b: Color) -> Metrics {
    Metrics {
        distance: euclidean_distance(a, b),
        contrast: contrast_ratio(a, b),
    }
}

pub fn color_metrics_hex(a: &str, b: &str) -> Result<Metrics, ColorError> {
    Ok(color_metrics(Color::from_hex(a)?, Color::from_hex(b)?))
}

/// Absolute minimums derived from 0-100 percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub min_contrast: f64,
    pub min_distance: f64,
}

impl Thresholds {
    pub fn from_percentages(contrast_pct: u8, distance_pct: u8) -> Self {
        Self {
            min_contrast: f64::from(contrast_pct.min(100)) / 100.0,
            min_distance: f64::from(distance_pct.min(100)) / 100.0 * MAX_DISTANCE,
        }
    }

    pub fn is_met_by(&self, metrics: &Metrics) -> bool {
        metrics.contrast >= self.min_contrast && metrics.distance >= self.min_distance
    }
}
