//! Configuration Error Types
//!
//! Centralized error handling for settings loading. Field-level problems are
//! never reported one at a time: the loader collects every failing field and
//! returns them together as [`ConfigError::Invalid`].

use std::fmt;
use std::path::PathBuf;

/// Settings loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read environment file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("{}", render_field_errors(.0))]
    Invalid(Vec<FieldError>),
}

impl ConfigError {
    /// Field-level errors carried by this error (empty for source failures).
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ConfigError::Invalid(errors) => errors,
            _ => &[],
        }
    }

    /// Find the error reported for a given environment key, if any.
    pub fn field(&self, key: &str) -> Option<&FieldError> {
        self.field_errors()
            .iter()
            .find(|e| e.field.eq_ignore_ascii_case(key))
    }
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Environment key of the failing field (e.g. `BOT_TOKEN`)
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn missing(field: &'static str) -> Self {
        Self::new(field, FieldErrorKind::Missing)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldErrorKind {
    /// No default and absent from every source
    #[error("field required")]
    Missing,

    /// Value present but not convertible to the declared type
    #[error("input {value:?} should be {expected}")]
    Coercion { value: String, expected: &'static str },

    /// Right primitive type, but a field-specific constraint is violated
    #[error("input {value:?} is malformed: {reason}")]
    Format { value: String, reason: String },
}

fn render_field_errors(errors: &[FieldError]) -> String {
    let mut out = format!(
        "{} validation error{} for Settings",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );
    for error in errors {
        out.push_str("\n  ");
        out.push_str(&error.to_string());
    }
    out
}
