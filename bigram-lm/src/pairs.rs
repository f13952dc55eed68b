//! Training pairs: every adjacent (previous, next) id pair of `[sentinel] + word + [sentinel]`.

use crate::tokenizer::{Tokenizer, TokenizerError};
use crate::trainer::TrainError;

/// Two aligned id sequences, one entry per bigram, in word order then left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingPairs {
    previous: Vec<usize>,
    next: Vec<usize>,
}

impl TrainingPairs {
    /// Extracts the bigrams of every word, bracketing each word with the sentinel.
    ///
    /// A word of `n` characters yields `n + 1` pairs.
    ///
    /// # Errors
    ///
    /// - [`TokenizerError::UnseenCharacter`] when a word holds a character the tokenizer does not know.
    pub fn extract<T, I, S>(words: I, tokenizer: &T) -> Result<Self, TokenizerError>
    where
        T: Tokenizer + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sentinel = tokenizer.sentinel_id();
        let mut previous = Vec::new();
        let mut next = Vec::new();
        for word in words {
            let mut ids = Vec::with_capacity(word.as_ref().len() + 2);
            ids.push(sentinel);
            ids.extend(tokenizer.encode(word.as_ref())?);
            ids.push(sentinel);
            for w in ids.windows(2) {
                previous.push(w[0]);
                next.push(w[1]);
            }
        }
        Ok(TrainingPairs { previous, next })
    }

    /// Assembles a pair set from raw sequences, checked against `vocab_size`.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidTrainingData`] on a length mismatch or an id `>= vocab_size`.
    pub fn from_parts(
        previous: Vec<usize>,
        next: Vec<usize>,
        vocab_size: usize,
    ) -> Result<Self, TrainError> {
        let pairs = TrainingPairs { previous, next };
        pairs.validate(vocab_size)?;
        Ok(pairs)
    }

    /// Checks that both sequences have the same length and every id is below `vocab_size`.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidTrainingData`] describing the first violation found.
    pub fn validate(&self, vocab_size: usize) -> Result<(), TrainError> {
        if self.previous.len() != self.next.len() {
            return Err(TrainError::InvalidTrainingData(format!(
                "{} previous ids but {} next ids",
                self.previous.len(),
                self.next.len()
            )));
        }
        let out_of_range = self
            .previous
            .iter()
            .chain(&self.next)
            .find(|&&id| id >= vocab_size);
        if let Some(id) = out_of_range {
            return Err(TrainError::InvalidTrainingData(format!(
                "id {id} out of range for vocab size {vocab_size}"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn previous(&self) -> &[usize] {
        &self.previous
    }

    #[must_use]
    pub fn next(&self) -> &[usize] {
        &self.next
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.previous.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }

    /// Iterates `(previous, next)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.previous.iter().copied().zip(self.next.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::CharTokenizer;

    #[test]
    fn pairs_of_ana_follow_the_boundaries() {
        let words = ["ana", "ann"];
        let t = CharTokenizer::from_words(words, '.').unwrap();
        let pairs = TrainingPairs::extract(["ana"], &t).unwrap();
        let got: Vec<_> = pairs.iter().collect();
        assert_eq!(got, [(0, 1), (1, 2), (2, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn pair_count_is_sum_of_word_lengths_plus_one() {
        let words = ["emma", "olivia", "ava", "x"];
        let t = CharTokenizer::from_words(words, '.').unwrap();
        let pairs = TrainingPairs::extract(words, &t).unwrap();
        let expected: usize = words.iter().map(|w| w.chars().count() + 1).sum();
        assert_eq!(pairs.len(), expected);
        assert_eq!(pairs.previous().len(), pairs.next().len());
        assert!(pairs.validate(t.vocab_size()).is_ok());
    }

    #[test]
    fn pairs_keep_word_order() {
        let t = CharTokenizer::from_words(["ab", "b"], '.').unwrap();
        let pairs = TrainingPairs::extract(["b", "ab"], &t).unwrap();
        assert_eq!(pairs.previous(), [0, 2, 0, 1, 2]);
        assert_eq!(pairs.next(), [2, 0, 1, 2, 0]);
    }

    #[test]
    fn unseen_character_propagates() {
        let t = CharTokenizer::from_words(["ab"], '.').unwrap();
        let err = TrainingPairs::extract(["ab", "abz"], &t).unwrap_err();
        assert_eq!(err, TokenizerError::UnseenCharacter('z'));
    }

    #[test]
    fn from_parts_rejects_bad_data() {
        assert!(matches!(
            TrainingPairs::from_parts(vec![0, 1], vec![1], 3),
            Err(TrainError::InvalidTrainingData(_))
        ));
        assert!(matches!(
            TrainingPairs::from_parts(vec![0, 1], vec![1, 3], 3),
            Err(TrainError::InvalidTrainingData(_))
        ));
        assert!(TrainingPairs::from_parts(vec![0, 1], vec![1, 2], 3).is_ok());
    }
}
