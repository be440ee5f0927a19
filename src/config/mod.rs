//! Collection manifest
//!
//! Resolution order for the manifest's values:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WEBLOADER_*)
//! 3. Manifest file (webloader.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_with_warnings, with_env_overrides, ManifestWarning, ENV_LOG,
    ENV_ROOT,
};
pub use types::{LoggingConfig, Manifest, DEFAULT_MANIFEST_NAME};
