//! Layered settings loader.
//!
//! Precedence (lowest to highest):
//! 1. `<application root>/.env`
//! 2. Process environment variables
//!
//! Field defaults live in the schema and only apply when neither layer
//! supplies a key.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, Map};

use super::settings::{RawSettings, Settings};
use super::sources::{schema_vars, EnvFileSource};
use crate::shared::error::ConfigError;

/// Name of the environment-definition file in the application root.
pub const ENV_FILE_NAME: &str = ".env";

/// Directory the `.env` file is looked up in: the working directory of the
/// running process.
pub fn application_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Loads [`Settings`] from an optional `.env` file and an environment snapshot.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading `<application root>/.env` and the process environment.
    pub fn new() -> Self {
        Self::rooted_at(application_root())
    }

    /// Loader reading `<root>/.env` and the process environment.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self {
            env_file: Some(root.as_ref().join(ENV_FILE_NAME)),
            env: None,
        }
    }

    /// Read the `.env` file from a different path.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Skip the `.env` layer entirely.
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Use the given variables instead of the process environment.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(schema_vars(
            vars.into_iter().map(|(k, v)| (k.into(), v.into())),
        ));
        self
    }

    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Load and validate settings.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let raw = self.collect()?;
        let settings = Settings::from_raw(&raw)?;

        tracing::info!(
            addr = %settings.server_addr(),
            http_server = settings.server.http_enabled,
            workers = settings.bot.workers,
            database = %settings.database.name,
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// Merge both layers into raw string values without validating them.
    pub fn collect(&self) -> Result<RawSettings, ConfigError> {
        let file = match &self.env_file {
            Some(path) => EnvFileSource::read(path)?,
            None => EnvFileSource::empty(),
        };

        let env = match &self.env {
            Some(vars) => vars.clone(),
            None => schema_vars(process_env()),
        };

        let values: HashMap<String, String> = Config::builder()
            .add_source(file)
            .add_source(Environment::default().source(Some(env)))
            .build()?
            .try_deserialize()?;

        Ok(RawSettings::new(values))
    }
}

/// Process environment, skipping entries that are not valid UTF-8.
fn process_env() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}
