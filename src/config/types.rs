//! Manifest type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WebLoaderResult;

use super::loader::{self, ManifestWarning};

/// File name looked up when no manifest path is given
pub const DEFAULT_MANIFEST_NAME: &str = "webloader.toml";

/// Logging configuration
///
/// ```toml
/// [logging]
/// default = "warn"
///
/// [logging.modules]
/// webloader = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub default: String,

    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// A collection manifest: root plus the entries to load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Base directory for relative entries (relative to the manifest itself)
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub files: Vec<PathBuf>,

    #[serde(default)]
    pub watch: Vec<PathBuf>,

    #[serde(default)]
    pub remote: Vec<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Manifest {
    /// Load a manifest, discarding unknown-key warnings
    pub fn load(path: &Path) -> WebLoaderResult<Self> {
        loader::load_with_warnings(path).map(|(manifest, _)| manifest)
    }

    /// Load a manifest and report unknown keys
    pub fn load_with_warnings(path: &Path) -> WebLoaderResult<(Self, Vec<ManifestWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Root to hand to a collection, resolved against `base_dir` when relative
    pub fn resolved_root(&self, base_dir: &Path) -> Option<PathBuf> {
        self.root.as_ref().map(|root| {
            if root.is_absolute() {
                root.clone()
            } else {
                base_dir.join(root)
            }
        })
    }
}
