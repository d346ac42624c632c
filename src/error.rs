use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum Code2TxtError {
    #[error("Could not determine working directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("Could not resolve path {path}: {source}")]
    InvalidPath {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not classify {path}: {source}")]
    Classify {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
}
impl Code2TxtError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Code2TxtError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn invalid_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Code2TxtError::InvalidPath {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn classify(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Code2TxtError::Classify {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Code2TxtError::Read {
            path: path.into(),
            source,
        }
    }
}
