//! Errors produced when building a vocabulary or encoding/decoding with it.

use thiserror::Error;

/// Errors produced by the tokenizer module.
///
/// # Variants
///
/// - **EmptyCorpus**: there are no characters to index (no words, or only empty ones).
/// - **SentinelInCorpus**: a word contains the boundary symbol, which would give the
///   sentinel two meanings and break the char/index bijection.
/// - **UnseenCharacter**: encoding met a character that was not present when the
///   vocabulary was built.
/// - **InvalidId**: decoding met an id outside `[0, vocab_size)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// No characters to build a vocabulary from.
    #[error("tokenizer: corpus has no characters")]
    EmptyCorpus,

    /// The corpus contains the sentinel character.
    #[error("tokenizer: sentinel {0:?} occurs inside a corpus word")]
    SentinelInCorpus(char),

    /// A character not in the vocabulary was encountered during encode.
    #[error("tokenizer: unseen character {0:?}")]
    UnseenCharacter(char),

    /// A token id is out of range during decode.
    #[error("tokenizer: invalid id {0}")]
    InvalidId(usize),
}
