//! Configuration for the corpus path, training, and sampling.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use std::path::PathBuf;

use constants::{
    DEFAULT_INPUT_PATH, DEFAULT_LEARNING_RATE, DEFAULT_LOG_EVERY, DEFAULT_MAX_WORD_LEN,
    DEFAULT_NUM_ITERATIONS, DEFAULT_NUM_WORDS, DEFAULT_SEED, DEFAULT_SENTINEL,
};

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

/// Central configuration for the bigram pipeline.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug)]
pub struct Config {
    /// Seed for both weight initialization and sampling (each gets its own RNG).
    pub seed: u64,
    /// Path to input corpus (one word per line).
    pub input_path: PathBuf,

    /// Number of full-batch gradient descent iterations.
    pub num_iterations: usize,
    /// Step size applied to the gradient.
    pub learning_rate: f64,
    /// Log loss every this many iterations (iteration 0 included).
    pub log_every: usize,

    /// Number of words to generate after training.
    pub num_words: usize,
    /// Maximum characters sampled for one word before it is cut off.
    pub max_word_len: usize,
    /// Word boundary symbol; must not occur in the corpus.
    pub sentinel: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            num_iterations: DEFAULT_NUM_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
            log_every: DEFAULT_LOG_EVERY,
            num_words: DEFAULT_NUM_WORDS,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            sentinel: DEFAULT_SENTINEL,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError::Validation`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if self.log_every == 0 {
            return Err(ConfigError::Validation(
                "log_every must be greater than 0".to_string(),
            ));
        }
        if self.num_words == 0 {
            return Err(ConfigError::Validation(
                "num_words must be greater than 0".to_string(),
            ));
        }
        if self.max_word_len == 0 {
            return Err(ConfigError::Validation(
                "max_word_len must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{ENV_LEARNING_RATE, ENV_NUM_ITERATIONS, ENV_SEED, ENV_SENTINEL};
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.sentinel, '.');
        assert_eq!(cfg.learning_rate, 50.0);
    }

    #[test]
    fn validate_rejects_zero_log_every() {
        let cfg = Config {
            log_every: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_learning_rate() {
        for lr in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = Config {
                learning_rate: lr,
                ..Config::default()
            };
            assert!(cfg.validate().is_err(), "lr {lr} should be rejected");
        }
    }

    #[test]
    fn validate_rejects_zero_counts() {
        let no_words = Config {
            num_words: 0,
            ..Config::default()
        };
        assert!(no_words.validate().is_err());
        let no_len = Config {
            max_word_len: 0,
            ..Config::default()
        };
        assert!(no_len.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_iterations() {
        let cfg = Config {
            num_iterations: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
    }

    /// Lock so env tests don't run in parallel and pollute each other.
    static CONFIG_ENV_LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        let _g = env_guard();
        std::env::remove_var(env_key(ENV_SEED));
        std::env::remove_var(env_key(ENV_NUM_ITERATIONS));
        let cfg = from_env().unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.seed, Config::default().seed);
        assert_eq!(cfg.num_iterations, Config::default().num_iterations);
    }

    #[test]
    fn from_env_overrides_with_env_vars() {
        let _g = env_guard();
        let key_iters = env_key(ENV_NUM_ITERATIONS);
        let key_lr = env_key(ENV_LEARNING_RATE);
        let key_sentinel = env_key(ENV_SENTINEL);
        std::env::set_var(&key_iters, "200");
        std::env::set_var(&key_lr, "10.5");
        std::env::set_var(&key_sentinel, "#");
        let cfg = from_env();
        std::env::remove_var(key_iters);
        std::env::remove_var(key_lr);
        std::env::remove_var(key_sentinel);
        let cfg = cfg.unwrap();
        assert_eq!(cfg.num_iterations, 200);
        assert_eq!(cfg.learning_rate, 10.5);
        assert_eq!(cfg.sentinel, '#');
    }

    #[test]
    fn from_env_returns_error_on_invalid_parse() {
        let _g = env_guard();
        let key = env_key(ENV_SEED);
        std::env::set_var(&key, "not_a_number");
        let res = from_env();
        std::env::remove_var(key);
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn from_env_rejects_multi_char_sentinel() {
        let _g = env_guard();
        let key = env_key(ENV_SENTINEL);
        std::env::set_var(&key, "<s>");
        let res = from_env();
        std::env::remove_var(key);
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn config_error_parse_display() {
        let e = ConfigError::Parse {
            key: "BIGRAM_SEED".to_string(),
            value: "abc".to_string(),
            message: "invalid digit".to_string(),
        };
        assert!(e.to_string().contains("BIGRAM_SEED"));
        assert!(e.to_string().contains("abc"));
        assert_eq!(e.message(), "invalid digit");
    }

    #[test]
    fn env_parsed_unset_returns_none() {
        let key = "BIGRAM_UNLIKELY_KEY_67890";
        assert_eq!(env_parsed::<u64>(key).unwrap(), None);
        assert_eq!(env_string(key).unwrap(), None);
    }
}
