//! Building and checking collections from a manifest

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Manifest;
use crate::domain::entities::FileCollection;
use crate::domain::ports::AssetCollection;
use crate::error::{WebLoaderError, WebLoaderResult};

/// Serializable view of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSnapshot {
    pub root: Option<PathBuf>,
    pub files: Vec<PathBuf>,
    pub watch_files: Vec<PathBuf>,
    pub remote_files: Vec<String>,
}

impl CollectionSnapshot {
    pub fn of<C: AssetCollection + ?Sized>(collection: &C) -> Self {
        Self {
            root: collection.root().map(Path::to_path_buf),
            files: collection.files().to_vec(),
            watch_files: collection.watch_files().to_vec(),
            remote_files: collection.remote_files().to_vec(),
        }
    }
}

/// Which manifest list an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Watch,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Watch => write!(f, "watch"),
        }
    }
}

/// An entry that resolved under neither candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub kind: EntryKind,
    pub path: PathBuf,
}

/// Result of checking every manifest entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub root: Option<PathBuf>,
    pub resolved: usize,
    pub remote: usize,
    pub missing: Vec<MissingEntry>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Build a collection from a manifest.
///
/// Files, then watch files, then remote files are added in manifest order.
/// The first entry that does not resolve aborts the build.
pub fn build_collection(manifest: &Manifest, base_dir: &Path) -> WebLoaderResult<FileCollection> {
    let mut collection = FileCollection::new(manifest.resolved_root(base_dir));

    collection.add_files(&manifest.files)?;
    collection.add_watch_files(&manifest.watch)?;
    collection.add_remote_files(manifest.remote.iter().cloned());

    info!(
        files = collection.files().len(),
        watch = collection.watch_files().len(),
        remote = collection.remote_files().len(),
        "built collection"
    );

    Ok(collection)
}

/// Resolve every local and watch entry, reporting all that are missing
pub fn check_manifest(manifest: &Manifest, base_dir: &Path) -> WebLoaderResult<CheckReport> {
    let collection = FileCollection::new(manifest.resolved_root(base_dir));
    let mut report = CheckReport {
        root: collection.root().map(Path::to_path_buf),
        remote: manifest.remote.len(),
        ..CheckReport::default()
    };

    let entries = manifest
        .files
        .iter()
        .map(|path| (EntryKind::File, path))
        .chain(manifest.watch.iter().map(|path| (EntryKind::Watch, path)));

    for (kind, path) in entries {
        match collection.canonicalize(path) {
            Ok(_) => report.resolved += 1,
            Err(WebLoaderError::FileNotFound { path }) => {
                warn!(%kind, path = %path.display(), "entry does not exist");
                report.missing.push(MissingEntry { kind, path });
            }
            Err(other) => return Err(other),
        }
    }

    Ok(report)
}
