//! # Domain Layer
//!
//! Value types the settings schema is built from. Nothing here touches the
//! process environment or the filesystem.
//!
//! ## Structure
//!
//! - **entities**: Runtime-managed state carried alongside the settings (channel registry)
//! - **value_objects**: Validated scalar types (MongoDB SRV connection string)

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
