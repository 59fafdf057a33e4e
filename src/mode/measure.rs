//! Distance and contrast between two colors

use std::fmt::Write;

use crate::color::{
    Color, ColorTable, MAX_DISTANCE, Thresholds, anti_color, color_metrics, relative_luminance,
    wcag_ratio,
};
use crate::error::AppError;
use crate::output::format_pct;

/// Resolve both colors and describe how they relate.
pub fn measure(
    table: &ColorTable,
    a: &str,
    b: &str,
    thresholds: Thresholds,
) -> Result<String, AppError> {
    let ca = table.resolve(a)?;
    let cb = table.resolve(b)?;
    let m = color_metrics(ca, cb);

    let mut out = String::new();
    describe(&mut out, "A", a, ca);
    describe(&mut out, "B", b, cb);
    let _ = writeln!(
        out,
        "Distance: {:.1} ({} of max)",
        m.distance,
        format_pct(m.distance / MAX_DISTANCE).trim_start()
    );
    let _ = writeln!(
        out,
        "Contrast: {:.4} (WCAG {:.2}:1)",
        m.contrast,
        wcag_ratio(ca, cb)
    );
    let verdict = if thresholds.is_met_by(&m) {
        "meets"
    } else {
        "does not meet"
    };
    let _ = writeln!(
        out,
        "Pair {} minimums (contrast >= {:.2}, distance >= {:.1})",
        verdict, thresholds.min_contrast, thresholds.min_distance
    );
    Ok(out)
}

fn describe(out: &mut String, label: &str, input: &str, color: Color) {
    let _ = writeln!(
        out,
        "[{}] {} = {}  luminance {:.4}  anti {}",
        label,
        input,
        color,
        relative_luminance(color),
        anti_color(color)
    );
}
