//! WebLoader - ordered, deduplicated web asset collections
//!
//! A `FileCollection` tracks three independent lists for an asset compiler:
//! local files, watch files that should trigger a rebuild, and remote URLs.
//! Local and watch entries are resolved against an optional root directory
//! and must exist when added.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{build_collection, check_manifest, CheckReport, CollectionSnapshot};
pub use config::Manifest;
pub use domain::entities::FileCollection;
pub use domain::ports::{AssetCollection, FileSystem};
pub use domain::value_objects::{join_under, normalize};
pub use error::{WebLoaderError, WebLoaderResult};
pub use infrastructure::fs::LocalFs;
