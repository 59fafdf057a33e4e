//! Errors surfaced by the command-line driver

use std::path::PathBuf;

use thiserror::Error;

use crate::color::ColorError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
