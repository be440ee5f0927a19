//! File Collection Entity
//!
//! Three independent, order-preserving, deduplicated sets:
//! - local files (canonical absolute paths)
//! - watch files (canonical absolute paths, tracked separately)
//! - remote files (opaque URLs, never canonicalized)
//!
//! Local and watch entries are resolved against the configured root first
//! and then directly; an entry that exists under neither is rejected.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{AssetCollection, FileSystem};
use crate::domain::value_objects::{join_under, normalize};
use crate::error::{WebLoaderError, WebLoaderResult};
use crate::infrastructure::fs::LocalFs;

/// Ordered, deduplicated collection of local, watch and remote files
#[derive(Debug, Clone)]
pub struct FileCollection<F: FileSystem = LocalFs> {
    root: Option<PathBuf>,
    files: Vec<PathBuf>,
    watch_files: Vec<PathBuf>,
    remote_files: Vec<String>,
    fs: F,
}

impl FileCollection<LocalFs> {
    /// Create a collection on the local disk
    pub fn new(root: Option<PathBuf>) -> Self {
        Self::with_fs(root, LocalFs::new())
    }

    /// Create a collection whose relative paths resolve under `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(Some(root.into()))
    }
}

impl Default for FileCollection<LocalFs> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<F: FileSystem> FileCollection<F> {
    /// Create a collection backed by a specific file system
    pub fn with_fs(root: Option<PathBuf>, fs: F) -> Self {
        Self {
            root,
            files: Vec::new(),
            watch_files: Vec::new(),
            remote_files: Vec::new(),
            fs,
        }
    }

    /// Base directory for relative paths
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Local files in insertion order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Watch files in insertion order
    pub fn watch_files(&self) -> &[PathBuf] {
        &self.watch_files
    }

    /// Remote URLs in insertion order
    pub fn remote_files(&self) -> &[String] {
        &self.remote_files
    }

    /// Resolve `path` to a canonical absolute path.
    ///
    /// Tries `root/path` first, then `path` itself (relative to the current
    /// directory). Both candidates are normalized lexically before the
    /// existence check. Fails with `FileNotFound` carrying the original input
    /// when neither exists.
    pub fn canonicalize<P: AsRef<Path>>(&self, path: P) -> WebLoaderResult<PathBuf> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(WebLoaderError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        if let Some(root) = &self.root {
            let candidate = self.absolutize(&join_under(root, path));
            if self.fs.exists(&candidate) {
                debug!(input = %path.display(), resolved = %candidate.display(), "resolved under root");
                return Ok(candidate);
            }
        }

        let candidate = self.absolutize(path);
        if self.fs.exists(&candidate) {
            debug!(input = %path.display(), resolved = %candidate.display(), "resolved directly");
            return Ok(candidate);
        }

        Err(WebLoaderError::FileNotFound {
            path: path.to_path_buf(),
        })
    }

    /// Add a local file; a file already present is left in place
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> WebLoaderResult<()> {
        let canonical = self.canonicalize(path)?;
        push_unique(&mut self.files, canonical, "file");
        Ok(())
    }

    /// Add local files in order, stopping at the first one that does not resolve
    pub fn add_files<I, P>(&mut self, paths: I) -> WebLoaderResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.add_file(path)?;
        }
        Ok(())
    }

    /// Remove a local file; removing an absent file is a no-op
    pub fn remove_file<P: AsRef<Path>>(&mut self, path: P) -> WebLoaderResult<()> {
        self.remove_files([path])
    }

    /// Remove local files.
    ///
    /// All arguments are canonicalized before anything is removed: if one of
    /// them does not resolve, the error is returned and the set is unchanged.
    pub fn remove_files<I, P>(&mut self, paths: I) -> WebLoaderResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let targets = paths
            .into_iter()
            .map(|path| self.canonicalize(path))
            .collect::<WebLoaderResult<Vec<_>>>()?;

        let before = self.files.len();
        self.files.retain(|file| !targets.contains(file));
        debug!(removed = before - self.files.len(), "removed files");
        Ok(())
    }

    /// Add a remote URL (exact string match for duplicates)
    pub fn add_remote_file(&mut self, url: impl Into<String>) {
        push_unique(&mut self.remote_files, url.into(), "remote file");
    }

    /// Add remote URLs in order
    pub fn add_remote_files<I, S>(&mut self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for url in urls {
            self.add_remote_file(url);
        }
    }

    /// Add a watch file; same resolution rules as [`Self::add_file`]
    pub fn add_watch_file<P: AsRef<Path>>(&mut self, path: P) -> WebLoaderResult<()> {
        let canonical = self.canonicalize(path)?;
        push_unique(&mut self.watch_files, canonical, "watch file");
        Ok(())
    }

    /// Add watch files in order, stopping at the first one that does not resolve
    pub fn add_watch_files<I, P>(&mut self, paths: I) -> WebLoaderResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.add_watch_file(path)?;
        }
        Ok(())
    }

    /// Empty all three sets
    pub fn clear(&mut self) {
        self.files.clear();
        self.watch_files.clear();
        self.remote_files.clear();
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            normalize(path)
        } else {
            normalize(self.fs.current_dir().join(path))
        }
    }
}

fn push_unique<T>(entries: &mut Vec<T>, entry: T, kind: &str)
where
    T: PartialEq + std::fmt::Debug,
{
    if entries.contains(&entry) {
        debug!(?entry, "{kind} already present");
        return;
    }
    debug!(?entry, "added {kind}");
    entries.push(entry);
}

impl<F: FileSystem> AssetCollection for FileCollection<F> {
    fn root(&self) -> Option<&Path> {
        FileCollection::root(self)
    }

    fn files(&self) -> &[PathBuf] {
        FileCollection::files(self)
    }

    fn watch_files(&self) -> &[PathBuf] {
        FileCollection::watch_files(self)
    }

    fn remote_files(&self) -> &[String] {
        FileCollection::remote_files(self)
    }
}
