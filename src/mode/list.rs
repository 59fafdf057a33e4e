//! Named color listing

use std::fmt::Write;

use crate::color::{Color, ColorTable, Thresholds, color_metrics, relative_luminance};
use crate::output::format_pct;

/// Render the color table sorted by name, optionally measured against a
/// background.
pub fn list_table(table: &ColorTable, against: Option<(Color, Thresholds)>) -> String {
    let mut entries = table.entries().to_vec();
    entries.sort_by(|a, b| a.name.cmp(b.name));

    let mut out = String::new();
    match against {
        Some((bg, _)) => {
            let _ = writeln!(
                out,
                "{:<22} {:<8} {:>7} {:>8} {:>8}  vs {}",
                "NAME", "HEX", "LUM", "DIST", "CONTR", bg
            );
        }
        None => {
            let _ = writeln!(out, "{:<22} {:<8} {:>7}", "NAME", "HEX", "LUM");
        }
    }

    for entry in &entries {
        let _ = write!(
            out,
            "{:<22} {:<8} {:>7.4}",
            entry.name,
            entry.color.to_string(),
            relative_luminance(entry.color)
        );
        if let Some((bg, thresholds)) = against {
            let m = color_metrics(entry.color, bg);
            let mark = if thresholds.is_met_by(&m) { "ok" } else { "-" };
            let _ = write!(
                out,
                " {:>8.1} {}  {}",
                m.distance,
                format_pct(m.contrast),
                mark
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{} colors", entries.len());
    out
}
