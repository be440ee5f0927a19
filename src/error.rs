//! Error types for WebLoader
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for WebLoader operations
pub type WebLoaderResult<T> = Result<T, WebLoaderError>;

/// Main error type for WebLoader operations
#[derive(Error, Debug)]
pub enum WebLoaderError {
    /// Path resolved neither under the root nor directly
    #[error("file '{}' does not exist", path.display())]
    FileNotFound { path: PathBuf },

    /// Manifest file is missing
    #[error("manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest could not be parsed
    #[error("invalid manifest {}: {message}", file.display())]
    InvalidManifest { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebLoaderError {
    /// The unresolved input path, if this is a resolution failure
    pub fn missing_path(&self) -> Option<&std::path::Path> {
        match self {
            WebLoaderError::FileNotFound { path } => Some(path.as_path()),
            _ => None,
        }
    }
}
