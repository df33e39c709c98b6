//! Error types for monaco-conf

use std::path::PathBuf;

/// Result type for monaco-conf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or installing editor settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Editor settings are already installed for this process")]
    AlreadyInstalled,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} settings: {message}")]
    Parse { format: String, message: String },

    #[error("Unsupported settings format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
