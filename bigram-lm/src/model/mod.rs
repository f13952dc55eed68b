//! The predictor: one `vocab_size x vocab_size` weight matrix read through a row-softmax.
//!
//! Selecting a row by id is the same as multiplying a one-hot encoding of the id by the
//! matrix, so [`BigramModel`] indexes rows directly. Row `r` holds the logits of every
//! next character after character `r`.

mod error;
#[cfg(test)]
mod tests;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

pub use error::ModelError;

/// Anything that yields a next-character distribution for a previous-character id.
pub trait Predictor {
    /// Number of ids the predictor accepts and the length of every returned row.
    fn vocab_size(&self) -> usize;

    /// Probability of every next id after `previous`. Non-negative, sums to 1.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] if `previous >= vocab_size()`.
    fn predict_row(&self, previous: usize) -> Result<Vec<f64>, ModelError>;

    /// One probability row per entry of `previous`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] produced by [`Predictor::predict_row`].
    fn predict(&self, previous: &[usize]) -> Result<Vec<Vec<f64>>, ModelError> {
        previous.iter().map(|&p| self.predict_row(p)).collect()
    }
}

/// Logits → probabilities in \[0,1] summing to 1. Subtracts the max so `exp` cannot overflow.
#[must_use]
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Single-layer log-linear bigram model.
///
/// Weights are row-major. The matrix is never resized; only the trainer mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct BigramModel {
    vocab_size: usize,
    weights: Vec<f64>,
}

impl BigramModel {
    /// Draws every weight from a standard normal distribution using `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(vocab_size: usize, rng: &mut R) -> Self {
        let weights: Vec<f64> = (0..vocab_size * vocab_size)
            .map(|_| StandardNormal.sample(rng))
            .collect();
        debug!("initialized {vocab_size}x{vocab_size} weight matrix");
        BigramModel {
            vocab_size,
            weights,
        }
    }

    /// [`BigramModel::new`] with a fresh generator seeded from `seed`.
    #[must_use]
    pub fn seeded(vocab_size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(vocab_size, &mut rng)
    }

    /// Wraps explicit row-major weights.
    ///
    /// # Errors
    ///
    /// - [`ModelError::WeightShape`] if `weights.len() != vocab_size * vocab_size`.
    /// - [`ModelError::NonFiniteWeight`] if any weight is NaN or infinite.
    pub fn from_weights(vocab_size: usize, weights: Vec<f64>) -> Result<Self, ModelError> {
        let expected = vocab_size * vocab_size;
        if weights.len() != expected {
            return Err(ModelError::WeightShape {
                expected,
                got: weights.len(),
            });
        }
        if let Some(position) = weights.iter().position(|w| !w.is_finite()) {
            return Err(ModelError::NonFiniteWeight { position });
        }
        Ok(BigramModel {
            vocab_size,
            weights,
        })
    }

    /// All weights, row-major.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Logits of the next character after `previous`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] if `previous >= vocab_size`.
    pub fn row(&self, previous: usize) -> Result<&[f64], ModelError> {
        if previous >= self.vocab_size {
            return Err(ModelError::IndexOutOfRange {
                index: previous,
                vocab_size: self.vocab_size,
            });
        }
        let start = previous * self.vocab_size;
        Ok(&self.weights[start..start + self.vocab_size])
    }

    /// Plain gradient descent step: `w -= learning_rate * g` for every weight.
    pub(crate) fn apply_gradient(&mut self, gradient: &[f64], learning_rate: f64) {
        debug_assert_eq!(gradient.len(), self.weights.len());
        for (w, g) in self.weights.iter_mut().zip(gradient) {
            *w -= learning_rate * g;
        }
    }
}

impl Predictor for BigramModel {
    fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    fn predict_row(&self, previous: usize) -> Result<Vec<f64>, ModelError> {
        Ok(softmax(self.row(previous)?))
    }
}
