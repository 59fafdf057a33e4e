//! Reading the text to colorize

use std::io::Read;
use std::path::Path;

use crate::error::AppError;

/// Literal text wins, then a file, then stdin.
pub fn read_text(text: Option<&str>, file: Option<&Path>) -> Result<String, AppError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        tracing::debug!(path = %path.display(), "reading input file");
        return std::fs::read_to_string(path).map_err(|e| AppError::io(path, e));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| AppError::io("<stdin>", e))?;
    Ok(buf)
}
