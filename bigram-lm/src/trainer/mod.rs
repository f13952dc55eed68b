//! Full-batch gradient descent on the mean negative log-likelihood of the training pairs.
//!
//! Every pair with the same previous id sees the same probability row, so the pairs are
//! folded once into a `vocab_size x vocab_size` count table. The loss and gradient computed
//! from the table are those of the per-pair full batch:
//!
//! ```text
//! loss          = -1/N * sum_{r,c} count[r][c] * ln p_r[c]
//! dloss/dW[r][c] = 1/N * (total[r] * p_r[c] - count[r][c])
//! ```
//!
//! which is `probabilities - one_hot(next)` averaged over the pairs. Rows that never occur
//! as a previous id get a zero gradient.

mod error;

use log::{debug, info};

use crate::config::Config;
use crate::model::{softmax, BigramModel, Predictor};
use crate::pairs::TrainingPairs;

pub use error::TrainError;

/// Probabilities are clamped to this before the logarithm so the loss stays finite.
pub const PROB_FLOOR: f64 = 1e-12;

/// Loss observed at a logged iteration (before that iteration's update).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub iteration: usize,
    pub loss: f64,
}

/// Outcome of [`Trainer::train`].
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingReport {
    /// One entry per iteration with `iteration % log_every == 0`.
    pub checkpoints: Vec<Progress>,
    /// Loss of the model after the last update.
    pub final_loss: f64,
}

/// Drives a [`BigramModel`] towards the bigram statistics of a [`TrainingPairs`] set.
#[derive(Clone, Debug)]
pub struct Trainer {
    vocab_size: usize,
    /// Row-major `count[r * vocab_size + c]` of pairs `(r, c)`.
    counts: Vec<f64>,
    /// Number of pairs whose previous id is `r`.
    row_totals: Vec<f64>,
    num_pairs: usize,
    learning_rate: f64,
    log_every: usize,
}

impl Trainer {
    /// Validates `pairs` against `vocab_size` and folds them into the count table.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidTrainingData`] for mismatched lengths, out-of-range ids or an empty set.
    /// - [`TrainError::InvalidHyperparameter`] for a non-positive learning rate or `log_every == 0`.
    pub fn new(
        pairs: &TrainingPairs,
        vocab_size: usize,
        learning_rate: f64,
        log_every: usize,
    ) -> Result<Self, TrainError> {
        pairs.validate(vocab_size)?;
        if pairs.is_empty() {
            return Err(TrainError::InvalidTrainingData(
                "no training pairs".to_string(),
            ));
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(TrainError::InvalidHyperparameter(format!(
                "learning rate {learning_rate}"
            )));
        }
        if log_every == 0 {
            return Err(TrainError::InvalidHyperparameter(
                "log_every must be greater than 0".to_string(),
            ));
        }

        let mut counts = vec![0.0; vocab_size * vocab_size];
        let mut row_totals = vec![0.0; vocab_size];
        for (prev, next) in pairs.iter() {
            counts[prev * vocab_size + next] += 1.0;
            row_totals[prev] += 1.0;
        }
        debug!(
            "trainer ready: {} pairs over {} distinct previous ids",
            pairs.len(),
            row_totals.iter().filter(|&&t| t > 0.0).count()
        );

        Ok(Trainer {
            vocab_size,
            counts,
            row_totals,
            num_pairs: pairs.len(),
            learning_rate,
            log_every,
        })
    }

    /// [`Trainer::new`] with the learning rate and logging interval taken from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Trainer::new`].
    pub fn from_config(
        pairs: &TrainingPairs,
        vocab_size: usize,
        config: &Config,
    ) -> Result<Self, TrainError> {
        Self::new(pairs, vocab_size, config.learning_rate, config.log_every)
    }

    #[must_use]
    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Mean negative log-likelihood of the pairs under `model`.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidTrainingData`] if `model` has a different vocabulary size.
    pub fn loss(&self, model: &BigramModel) -> Result<f64, TrainError> {
        self.forward(model, false).map(|(loss, _)| loss)
    }

    /// Mean negative log-likelihood and its gradient with respect to every weight (row-major).
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidTrainingData`] if `model` has a different vocabulary size.
    pub fn loss_and_gradient(&self, model: &BigramModel) -> Result<(f64, Vec<f64>), TrainError> {
        self.forward(model, true)
    }

    /// Runs `num_iterations` full-batch steps `w -= learning_rate * grad`, mutating `model`.
    ///
    /// Zero iterations leave the weights untouched.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidTrainingData`] if `model` has a different vocabulary size.
    pub fn train(
        &self,
        model: &mut BigramModel,
        num_iterations: usize,
    ) -> Result<TrainingReport, TrainError> {
        self.check_model(model)?;
        let mut checkpoints = Vec::new();
        for iteration in 0..num_iterations {
            let (loss, gradient) = self.loss_and_gradient(model)?;
            if iteration % self.log_every == 0 {
                info!("iteration {iteration:>6} | loss {loss:.6}");
                let head = model.vocab_size().min(5);
                debug!("row 0 weights: {:?}", &model.weights()[..head]);
                checkpoints.push(Progress { iteration, loss });
            }
            model.apply_gradient(&gradient, self.learning_rate);
        }
        let final_loss = self.loss(model)?;
        info!("trained {num_iterations} iterations | final loss {final_loss:.6}");
        Ok(TrainingReport {
            checkpoints,
            final_loss,
        })
    }

    fn check_model(&self, model: &BigramModel) -> Result<(), TrainError> {
        if model.vocab_size() != self.vocab_size {
            return Err(TrainError::InvalidTrainingData(format!(
                "model vocab size {} does not match training vocab size {}",
                model.vocab_size(),
                self.vocab_size
            )));
        }
        Ok(())
    }

    fn forward(
        &self,
        model: &BigramModel,
        with_gradient: bool,
    ) -> Result<(f64, Vec<f64>), TrainError> {
        self.check_model(model)?;
        let v = self.vocab_size;
        let n = self.num_pairs as f64;
        let mut nll = 0.0;
        let mut gradient = if with_gradient {
            vec![0.0; v * v]
        } else {
            Vec::new()
        };

        for (r, &total) in self.row_totals.iter().enumerate() {
            if total == 0.0 {
                continue;
            }
            let logits = model
                .row(r)
                .map_err(|e| TrainError::InvalidTrainingData(e.to_string()))?;
            let probs = softmax(logits);
            let counts = &self.counts[r * v..(r + 1) * v];
            for (c, (&p, &count)) in probs.iter().zip(counts).enumerate() {
                if count > 0.0 {
                    nll -= count * p.max(PROB_FLOOR).ln();
                }
                if with_gradient {
                    gradient[r * v + c] = (total * p - count) / n;
                }
            }
        }
        Ok((nll / n, gradient))
    }
}
