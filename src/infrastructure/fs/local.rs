//! Local File System Implementation
//!
//! Implements the FileSystem port for the local disk.

use crate::domain::ports::FileSystem;
use std::path::{Path, PathBuf};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> PathBuf {
        // An unreadable cwd leaves relative paths relative; the existence
        // check still resolves them against the process cwd.
        std::env::current_dir().unwrap_or_default()
    }
}
