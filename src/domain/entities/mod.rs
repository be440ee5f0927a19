//! Domain Entities

mod file_collection;

pub use file_collection::FileCollection;
