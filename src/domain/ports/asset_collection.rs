//! AssetCollection port - what asset compilers consume
//!
//! Compilers and renderers only need the resolved, ordered sequences; they
//! depend on this trait rather than on a concrete collection.

use std::path::{Path, PathBuf};

/// Read side of a file collection
pub trait AssetCollection {
    /// Base directory for relative paths, if any
    fn root(&self) -> Option<&Path>;

    /// Local files in insertion order
    fn files(&self) -> &[PathBuf];

    /// Files whose modification should trigger a rebuild, in insertion order
    fn watch_files(&self) -> &[PathBuf];

    /// Remote URLs in insertion order
    fn remote_files(&self) -> &[String];
}
