//! In-memory file system for tests

use crate::domain::ports::FileSystem;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Mock file system holding a fixed set of existing paths
#[derive(Debug, Clone)]
pub struct MockFs {
    pub existing: HashSet<PathBuf>,
    pub cwd: PathBuf,
}

impl MockFs {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            existing: HashSet::new(),
            cwd: cwd.into(),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.existing.insert(path.into());
        self
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }

    fn current_dir(&self) -> PathBuf {
        self.cwd.clone()
    }
}
