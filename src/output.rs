use std::io::Write;
use std::path::Path;

use colored::*;

use crate::error::AppError;

pub fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Write rendered output to `path`, or stdout when no path is given.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<(), AppError> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| AppError::io(path, e))?;
            tracing::debug!(path = %path.display(), bytes = rendered.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| AppError::io("<stdout>", e))?;
        }
    }
    Ok(())
}

pub fn copy_to_clipboard(rendered: &str) -> Result<(), AppError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(rendered.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;
    tracing::debug!(bytes = rendered.len(), "copied output to clipboard");
    Ok(())
}

/// Format a 0..1 metric as a percentage column
pub fn format_pct(value: f64) -> String {
    format!("{:>6.1}%", value * 100.0)
}
