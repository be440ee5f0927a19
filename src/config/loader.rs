//! Manifest loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{WebLoaderError, WebLoaderResult};

use super::types::Manifest;

/// Overrides `root`
pub const ENV_ROOT: &str = "WEBLOADER_ROOT";
/// Overrides `logging.default`
pub const ENV_LOG: &str = "WEBLOADER_LOG";

/// Non-fatal manifest warning (unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ManifestWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a manifest and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> WebLoaderResult<(Manifest, Vec<ManifestWarning>)> {
    if !path.exists() {
        return Err(WebLoaderError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WebLoaderError::InvalidManifest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(
        manifest = %path.display(),
        files = manifest.files.len(),
        watch = manifest.watch.len(),
        remote = manifest.remote.len(),
        "loaded manifest"
    );

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ManifestWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

/// Apply environment variable overrides (WEBLOADER_* prefix)
pub fn with_env_overrides(manifest: Manifest) -> Manifest {
    apply_env_overrides(manifest, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides<F>(mut manifest: Manifest, lookup: F) -> Manifest
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup(ENV_ROOT).filter(|v| !v.is_empty()) {
        manifest.root = Some(PathBuf::from(root));
    }

    if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
        manifest.logging.default = level;
    }

    manifest
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["root", "files", "watch", "remote", "logging", "default", "modules"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
