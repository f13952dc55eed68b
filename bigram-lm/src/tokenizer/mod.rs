//! Tokenization: map characters to dense ids and back.
//!
//! This module defines the **trait** ([`Tokenizer`]) and **error** ([`TokenizerError`]).
//! [`CharTokenizer`] is the character-level implementation; [`Vocab`] holds its mapping.

mod error;
mod impls;
mod vocab;

pub use error::TokenizerError;
pub use impls::CharTokenizer;
pub use vocab::Vocab;

/// Trait for tokenizers: encode text to ids and decode ids to text.
pub trait Tokenizer {
    /// Encodes a string into a sequence of ids.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnseenCharacter`] if a character is not in the vocabulary.
    fn encode(&self, s: &str) -> Result<Vec<usize>, TokenizerError>;

    /// Decodes a sequence of ids into a string.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::InvalidId`] if an id is out of range.
    fn decode(&self, ids: &[usize]) -> Result<String, TokenizerError>;

    /// Vocabulary size, sentinel included.
    fn vocab_size(&self) -> usize;

    /// Id of the word boundary symbol.
    fn sentinel_id(&self) -> usize;
}
