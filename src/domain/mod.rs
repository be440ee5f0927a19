//! Domain Layer
//!
//! Pure bookkeeping of asset paths. The only I/O is existence checks,
//! which go through the `FileSystem` port.
//!
//! ## Structure
//!
//! - `entities/` - `FileCollection`
//! - `value_objects/` - lexical path normalization
//! - `ports/` - interface definitions for infrastructure and consumers

pub mod entities;
pub mod ports;
pub mod value_objects;
