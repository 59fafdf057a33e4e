//! Diagnostic logging setup

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::AppError;

/// Map the command-line verbosity flags to a maximum level.
pub fn level_for(verbose: bool, debug: bool, quiet: bool) -> Level {
    if debug {
        Level::TRACE
    } else if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install the global subscriber, writing to `log_path` (truncated) or stderr.
pub fn init(level: Level, log_path: Option<&Path>) -> Result<(), AppError> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_path {
        Some(path) => {
            let file = File::create(path).map_err(|e| AppError::io(path, e))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
