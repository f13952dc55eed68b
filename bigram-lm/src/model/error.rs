//! Errors produced by the predictor.

use thiserror::Error;

/// Errors produced by the model module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A previous-character id does not select a row of the weight matrix.
    #[error("model: index {index} out of range for vocab size {vocab_size}")]
    IndexOutOfRange {
        /// The offending id.
        index: usize,
        /// Number of rows in the weight matrix.
        vocab_size: usize,
    },

    /// Explicit weights do not form a `vocab_size x vocab_size` matrix.
    #[error("model: expected {expected} weights, got {got}")]
    WeightShape {
        /// `vocab_size * vocab_size`.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },

    /// Explicit weights contain NaN or an infinity.
    #[error("model: weight at flat position {position} is not finite")]
    NonFiniteWeight {
        /// Row-major position of the first bad entry.
        position: usize,
    },
}
