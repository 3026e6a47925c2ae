// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqRankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Directory walk failed: {0}")]
    Walk(String),

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Random jump factor must be within [0, 1], got {0}")]
    InvalidJump(f64),

    #[error("Tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, SeqRankError>;

impl SeqRankError {
    /// Wraps an I/O failure with the path that caused it.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True for errors caused by bad user-supplied settings rather than the environment.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::InvalidJump(_) | Self::InvalidTolerance(_)
        )
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for SeqRankError {
    fn from(e: walkdir::Error) -> Self {
        let Some(path) = e.path().map(std::path::Path::to_path_buf) else {
            return Self::Walk(e.to_string());
        };
        match e.into_io_error() {
            Some(source) => Self::Io { source, path },
            None => Self::Walk(format!("filesystem loop at {}", path.display())),
        }
    }
}
