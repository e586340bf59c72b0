//! Configuration sources.
//!
//! The `.env` file is parsed with `dotenvy` into memory and exposed to the
//! `config` builder as a regular [`Source`]. The process environment is never
//! modified, so environment variables keep their precedence over the file.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use config::{Map, Source, Value};

use super::keys;
use crate::shared::error::ConfigError;

/// Key/value pairs read from a `.env` file.
#[derive(Debug, Clone, Default)]
pub struct EnvFileSource {
    path: Option<PathBuf>,
    entries: HashMap<String, String>,
}

impl EnvFileSource {
    /// A source that contributes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read `path`. A missing file yields an empty source.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let env_file_error = |source: dotenvy::Error| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(ref e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Environment file not found, skipping");
                return Ok(Self::empty());
            }
            Err(e) => return Err(env_file_error(e)),
        };

        let mut entries = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(env_file_error)?;
            if keys::is_known(&key) {
                entries.insert(key.to_ascii_lowercase(), value);
            } else {
                tracing::debug!(%key, "Ignoring unknown key in environment file");
            }
        }

        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "Environment file loaded"
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Source for EnvFileSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let origin = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".env".into());

        Ok(self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), Value::new(Some(&origin), value.clone())))
            .collect())
    }
}

/// Schema keys present in an environment snapshot, lowercased for the
/// `config` builder.
///
/// When a key appears in several spellings, the canonical upper-case one
/// wins regardless of iteration order.
pub fn schema_vars<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut out = Map::new();
    for (key, value) in vars.into_iter().filter(|(key, _)| keys::is_known(key)) {
        let lowered = key.to_ascii_lowercase();
        if keys::is_canonical(&key) || !out.contains_key(&lowered) {
            out.insert(lowered, value);
        } else {
            tracing::debug!(%key, "Ignoring non-canonical duplicate of environment key");
        }
    }
    out
}
