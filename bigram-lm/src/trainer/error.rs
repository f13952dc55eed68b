//! Errors produced by the trainer.

use thiserror::Error;

/// Errors produced by the trainer module.
///
/// Both variants are contract violations by the caller; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainError {
    /// Pair sequences of different length, an id outside the vocabulary, no pairs at all,
    /// or a model whose vocabulary size differs from the pair set's.
    #[error("invalid training data: {0}")]
    InvalidTrainingData(String),

    /// Learning rate not finite and positive, or a zero logging interval.
    #[error("invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),
}
