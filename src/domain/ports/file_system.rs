//! FileSystem port - the read-only view of the disk used for resolution
//!
//! Collections only ever ask whether a path exists and where the current
//! directory is; nothing is read or written.

use std::path::{Path, PathBuf};

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MockFs` - in-memory, for tests
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Directory that relative paths resolve against
    fn current_dir(&self) -> PathBuf;
}
