//! Configuration errors.
//!
//! All errors produced by the config module (validation and env loading) use [`ConfigError`].

use thiserror::Error;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: a value is out of range (e.g. `log_every == 0`).
///   *Recovery*: fix the value (via env or code) so that `validate()` passes.
///
/// - **EnvVar**: an environment variable could not be read (e.g. invalid Unicode).
///
/// - **Parse**: an environment variable was set but could not be parsed into the
///   expected type (e.g. `BIGRAM_SEED=abc`). Unset it to fall back to the default.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration validation failed.
    #[error("config validation: {0}")]
    Validation(String),

    /// Failed to read an environment variable.
    #[error("env var {key}: {message}")]
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause (e.g. NotUnicode).
        message: String,
    },

    /// Environment variable was set but could not be parsed into the expected type.
    #[error("env var {key}={value:?}: {message}")]
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable parse reason (e.g. "invalid digit found in string").
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } => message,
            ConfigError::Parse { message, .. } => message,
        }
    }
}
