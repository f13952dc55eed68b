//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `BIGRAM_SEED`).
pub(crate) const ENV_PREFIX: &str = "BIGRAM_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_INPUT_PATH: &str = "INPUT_PATH";
pub(crate) const ENV_NUM_ITERATIONS: &str = "NUM_ITERATIONS";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_LOG_EVERY: &str = "LOG_EVERY";
pub(crate) const ENV_NUM_WORDS: &str = "NUM_WORDS";
pub(crate) const ENV_MAX_WORD_LEN: &str = "MAX_WORD_LEN";
pub(crate) const ENV_SENTINEL: &str = "SENTINEL";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 2_147_483_647;
pub(crate) const DEFAULT_INPUT_PATH: &str = "names.txt";
pub(crate) const DEFAULT_NUM_ITERATIONS: usize = 5001;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 50.0;
pub(crate) const DEFAULT_LOG_EVERY: usize = 1000;
pub(crate) const DEFAULT_NUM_WORDS: usize = 10;
/// Upper bound on sampled characters per word; a word that reaches it is cut off.
pub(crate) const DEFAULT_MAX_WORD_LEN: usize = 1000;
pub(crate) const DEFAULT_SENTINEL: char = '.';
