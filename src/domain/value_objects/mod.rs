//! Domain Value Objects
//!
//! Immutable value types and pure helpers shared by the domain layer.

pub mod path;

pub use path::{join_under, normalize};
