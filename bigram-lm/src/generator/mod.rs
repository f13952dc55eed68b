//! Autoregressive sampling of words from a trained predictor.
//!
//! A word starts at the sentinel. Each step samples the next id from the predicted row of the
//! current id; sampling the sentinel ends the word (the sentinel itself is not emitted).
//! A word that reaches `max_len` characters without sampling the sentinel is cut off there,
//! so a model that never predicts the sentinel cannot loop forever.

mod error;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{weighted::WeightedIndex, Distribution};

use crate::config::Config;
use crate::model::Predictor;
use crate::tokenizer::Tokenizer;

pub use error::GenerateError;

/// Word sampler owning its own seeded generator.
#[derive(Clone, Debug)]
pub struct Generator {
    rng: StdRng,
    max_len: usize,
}

impl Generator {
    /// Creates a sampler seeded with `seed` that cuts words off at `max_len` characters.
    ///
    /// A `max_len` of 0 yields empty words without consulting the model.
    #[must_use]
    pub fn new(seed: u64, max_len: usize) -> Self {
        Generator {
            rng: StdRng::seed_from_u64(seed),
            max_len,
        }
    }

    /// [`Generator::new`] with the seed and cap taken from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.seed, config.max_word_len)
    }

    /// Samples `count` words in order.
    ///
    /// # Errors
    ///
    /// See [`Generator::generate_word`].
    pub fn generate<P, T>(
        &mut self,
        count: usize,
        model: &P,
        tokenizer: &T,
    ) -> Result<Vec<String>, GenerateError>
    where
        P: Predictor + ?Sized,
        T: Tokenizer + ?Sized,
    {
        (0..count)
            .map(|_| self.generate_word(model, tokenizer))
            .collect()
    }

    /// Samples one word, without the terminating sentinel.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::VocabMismatch`] if `model` and `tokenizer` have different vocabulary sizes.
    /// - [`GenerateError::Model`] if the model rejects an id.
    /// - [`GenerateError::Sampling`] if a predicted row is not a valid distribution.
    /// - [`GenerateError::Decode`] if a sampled id has no character.
    pub fn generate_word<P, T>(&mut self, model: &P, tokenizer: &T) -> Result<String, GenerateError>
    where
        P: Predictor + ?Sized,
        T: Tokenizer + ?Sized,
    {
        if model.vocab_size() != tokenizer.vocab_size() {
            return Err(GenerateError::VocabMismatch {
                model: model.vocab_size(),
                tokenizer: tokenizer.vocab_size(),
            });
        }
        let sentinel = tokenizer.sentinel_id();
        let mut current = sentinel;
        let mut ids = Vec::new();
        loop {
            if ids.len() >= self.max_len {
                warn!(
                    "word reached {} characters without sampling the sentinel; cutting it off",
                    self.max_len
                );
                break;
            }
            let next = self.sample_next(model, current)?;
            if next == sentinel {
                break;
            }
            ids.push(next);
            current = next;
        }
        let word = tokenizer.decode(&ids)?;
        debug!("sampled {word:?}");
        Ok(word)
    }

    /// Draws the id following `current` from the model's categorical distribution.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::Model`] if `current` is out of range.
    /// - [`GenerateError::Sampling`] if the row cannot be sampled.
    pub fn sample_next<P>(&mut self, model: &P, current: usize) -> Result<usize, GenerateError>
    where
        P: Predictor + ?Sized,
    {
        let probs = model.predict_row(current)?;
        let dist = WeightedIndex::new(&probs)?;
        Ok(dist.sample(&mut self.rng))
    }
}
