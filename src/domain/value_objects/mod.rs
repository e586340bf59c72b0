//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **MongoSrvDsn**: `mongodb+srv://` connection string with credential redaction

mod mongo_dsn;

pub use mongo_dsn::*;
