//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_collection;
pub mod file_system;

pub use asset_collection::AssetCollection;
pub use file_system::FileSystem;
