//! CLI command implementations

mod check;
mod list;
mod resolve;

pub use check::cmd_check;
pub use list::cmd_list;
pub use resolve::cmd_resolve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use webloader::config::{self, Manifest, ManifestWarning, DEFAULT_MANIFEST_NAME};

/// Manifest plus the directory its relative root resolves against
#[derive(Debug)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    pub base_dir: PathBuf,
    pub warnings: Vec<ManifestWarning>,
}

/// Locate and load the manifest, then apply env and CLI overrides.
///
/// Without `--manifest`, `./webloader.toml` is used when present; otherwise
/// an empty manifest rooted at the current directory.
pub fn load_manifest(explicit: Option<&Path>, root: Option<&Path>) -> Result<LoadedManifest> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let path = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => Some(cwd.join(DEFAULT_MANIFEST_NAME)).filter(|p| p.is_file()),
    };

    let (manifest, base_dir, warnings) = match path {
        Some(path) => {
            let (manifest, warnings) = Manifest::load_with_warnings(&path)?;
            let base_dir = path.parent().map(Path::to_path_buf).unwrap_or(cwd.clone());
            (manifest, base_dir, warnings)
        }
        None => (Manifest::default(), cwd.clone(), Vec::new()),
    };

    let mut manifest = config::with_env_overrides(manifest);
    if let Some(root) = root {
        manifest.root = Some(cwd.join(root));
    }

    Ok(LoadedManifest {
        manifest,
        base_dir,
        warnings,
    })
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
