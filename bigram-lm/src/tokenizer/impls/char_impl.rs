//! Character-level tokenizer: sentinel at id 0, then the corpus characters in sorted order.

use std::collections::BTreeSet;

use super::super::Vocab;
use super::super::{Tokenizer, TokenizerError};

/// Character-level tokenizer built once from a word list; immutable afterwards.
#[derive(Clone, Debug)]
pub struct CharTokenizer {
    vocab: Vocab,
    sentinel: char,
}

impl CharTokenizer {
    /// Builds the vocabulary from `words`.
    ///
    /// Distinct characters are sorted and take ids `1..=K`; `sentinel` takes id 0.
    ///
    /// # Errors
    ///
    /// - [`TokenizerError::EmptyCorpus`] when the words contain no characters.
    /// - [`TokenizerError::SentinelInCorpus`] when a word contains `sentinel`.
    pub fn from_words<I, S>(words: I, sentinel: char) -> Result<Self, TokenizerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = BTreeSet::new();
        for word in words {
            chars.extend(word.as_ref().chars());
        }
        if chars.is_empty() {
            return Err(TokenizerError::EmptyCorpus);
        }
        if chars.contains(&sentinel) {
            return Err(TokenizerError::SentinelInCorpus(sentinel));
        }
        let vocab = Vocab::new(std::iter::once(sentinel).chain(chars));
        Ok(CharTokenizer { vocab, sentinel })
    }

    /// The boundary character.
    #[must_use]
    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// The underlying id/char mapping.
    #[must_use]
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }
}

impl Tokenizer for CharTokenizer {
    fn encode(&self, s: &str) -> Result<Vec<usize>, TokenizerError> {
        s.chars()
            .map(|ch| {
                self.vocab
                    .get_id(ch)
                    .ok_or(TokenizerError::UnseenCharacter(ch))
            })
            .collect()
    }

    fn decode(&self, ids: &[usize]) -> Result<String, TokenizerError> {
        ids.iter()
            .map(|&id| self.vocab.get_char(id).ok_or(TokenizerError::InvalidId(id)))
            .collect()
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn sentinel_id(&self) -> usize {
        0
    }
}
