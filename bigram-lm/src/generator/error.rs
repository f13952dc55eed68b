//! Errors produced while sampling words.

use thiserror::Error;

use crate::model::ModelError;
use crate::tokenizer::TokenizerError;

/// Errors produced by the generator module.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The model and the tokenizer disagree on the vocabulary size.
    #[error("generate: model has {model} ids but tokenizer has {tokenizer}")]
    VocabMismatch { model: usize, tokenizer: usize },

    /// The model could not produce a probability row.
    #[error("generate: {0}")]
    Model(#[from] ModelError),

    /// The probability row is not a valid categorical distribution (e.g. NaN entries).
    #[error("generate: cannot sample from row: {0}")]
    Sampling(#[from] rand_distr::weighted::Error),

    /// A sampled id has no character.
    #[error("generate: {0}")]
    Decode(#[from] TokenizerError),
}
