//! Named color table and contrast-aware color selection

mod metrics;
mod rgb;
mod select;
mod table;

pub use metrics::{
    MAX_DISTANCE, Metrics, Thresholds, anti_color, anti_color_hex, color_metrics,
    color_metrics_hex, contrast_ratio, euclidean_distance, relative_luminance, wcag_ratio,
};
pub use rgb::{Color, ColorError};
pub use select::{
    ColorSelector, DEFAULT_MAX_ATTEMPTS, FULL_BRIGHTNESS, Outcome, SelectOptions, Selection,
};
pub use table::{ColorTable, NamedColor};

#[cfg(test)]
mod tests;
