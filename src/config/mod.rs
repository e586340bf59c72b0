//! # Configuration Module
//!
//! This module handles application configuration loading and validation.
//! Configuration can be loaded from:
//! - A `.env` file in the application root (via dotenvy)
//! - Environment variables (highest priority)
//!
//! Every field is coerced from its raw string form; failures are collected
//! and returned together as a single [`ConfigError::Invalid`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use file_share_bot::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```
//!
//! [`ConfigError::Invalid`]: crate::shared::error::ConfigError::Invalid

pub mod coercion;
pub mod keys;
mod loader;
mod settings;
mod sources;

pub use loader::*;
pub use settings::*;
pub use sources::*;
