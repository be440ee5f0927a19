//! Application Layer
//!
//! Use cases that turn a manifest into a collection.

mod load;

pub use load::{
    build_collection, check_manifest, CheckReport, CollectionSnapshot, EntryKind, MissingEntry,
};
