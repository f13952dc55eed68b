//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single place for key names
//! (see the `constants` submodule) and typed errors ([`ConfigError`]).

use std::path::PathBuf;

use super::constants::{
    ENV_INPUT_PATH, ENV_LEARNING_RATE, ENV_LOG_EVERY, ENV_MAX_WORD_LEN, ENV_NUM_ITERATIONS,
    ENV_NUM_WORDS, ENV_PREFIX, ENV_SEED, ENV_SENTINEL,
};
use super::Config;
use super::ConfigError;

/// Returns the full environment variable key for a given suffix (e.g. `SEED` → `BIGRAM_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but not Unicode.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails (e.g. `SEED=abc` for `u64`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`Config`] from environment variables, falling back to [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse (e.g. `BIGRAM_SEED=abc`).
/// The result is not validated; call [`Config::validate`] before use.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let input_path = env_string(&env_key(ENV_INPUT_PATH))?
        .map(PathBuf::from)
        .unwrap_or(default.input_path);
    let num_iterations =
        env_parsed::<usize>(&env_key(ENV_NUM_ITERATIONS))?.unwrap_or(default.num_iterations);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let log_every = env_parsed::<usize>(&env_key(ENV_LOG_EVERY))?.unwrap_or(default.log_every);
    let num_words = env_parsed::<usize>(&env_key(ENV_NUM_WORDS))?.unwrap_or(default.num_words);
    let max_word_len =
        env_parsed::<usize>(&env_key(ENV_MAX_WORD_LEN))?.unwrap_or(default.max_word_len);
    let sentinel = env_parsed::<char>(&env_key(ENV_SENTINEL))?.unwrap_or(default.sentinel);

    Ok(Config {
        seed,
        input_path,
        num_iterations,
        learning_rate,
        log_every,
        num_words,
        max_word_len,
        sentinel,
    })
}
