//! Types for loaded data: [`Word`] (one non-empty line) and [`Corpus`] (non-empty list of words).

use std::fmt;

use super::DataError;

/// A single non-empty word (one trimmed line of the corpus).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word(String);

impl Word {
    /// Creates a [`Word`] from a line (trimmed).
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyWord`] when `line` is empty or only whitespace.
    pub fn new(line: &str) -> Result<Self, DataError> {
        let s = line.trim();
        if s.is_empty() {
            return Err(DataError::EmptyWord);
        }
        Ok(Word(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Loaded corpus: a non-empty, ordered list of [`Word`]s.
#[derive(Clone, Debug)]
pub struct Corpus(Vec<Word>);

impl Corpus {
    /// Builds a [`Corpus`] from a non-empty list of words.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyFile`] when `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DataError> {
        if words.is_empty() {
            return Err(DataError::EmptyFile);
        }
        Ok(Corpus(words))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    /// Returns the words as string slices, in file order.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.0.iter().map(Word::as_str).collect()
    }
}
