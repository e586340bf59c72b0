//! # File Share Bot Library
//!
//! Startup configuration for a Telegram file-sharing bot:
//! - Settings schema with typed, grouped fields
//! - Layered loading from a `.env` file and environment variables
//! - Field coercion (scalar-or-list IDs, SRV connection strings, booleans)
//! - Aggregate validation errors listing every bad field at once
//!
//! ## Module Structure
//!
//! ```text
//! file_share_bot/
//! +-- config/     Settings schema, sources and loader
//! +-- domain/     Value objects (MongoSrvDsn) and the channel registry
//! +-- shared/     Error types
//! +-- telemetry   Tracing setup
//! ```

// Configuration module
pub mod config;

// Domain types used by the settings schema
pub mod domain;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
