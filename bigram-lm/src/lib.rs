//! # bigram-lm
//!
//! Character-level bigram language model for names: build a vocabulary, extract
//! (previous, next) pairs, fit a softmax weight matrix by full-batch gradient descent,
//! and sample new words. Every random draw comes from a generator seeded through
//! [`config::Config`], so a run is reproducible.
//!
//! ```no_run
//! let config = bigram_lm::config::Config::default();
//! for word in bigram_lm::run(&config)? {
//!     println!("{word}");
//! }
//! # Ok::<(), bigram_lm::Error>(())
//! ```

pub mod config;
pub mod data;
mod error;
pub mod generator;
pub mod model;
pub mod pairs;
pub mod tokenizer;
pub mod trainer;

use log::info;

use crate::config::Config;
use crate::data::Corpus;
use crate::generator::Generator;
use crate::model::BigramModel;
use crate::pairs::TrainingPairs;
use crate::tokenizer::{CharTokenizer, Tokenizer};
use crate::trainer::Trainer;

pub use error::Error;

/// Loads the corpus at `config.input_path` and runs [`run_on_corpus`].
///
/// # Errors
///
/// Returns the [`Error`] of the first stage that fails.
pub fn run(config: &Config) -> Result<Vec<String>, Error> {
    config.validate()?;
    let corpus = data::load_from_path(&config.input_path)?;
    info!(
        "loaded {} words from {}",
        corpus.len(),
        config.input_path.display()
    );
    run_on_corpus(&corpus, config)
}

/// Vocabulary → pairs → seeded model → training → sampling of `config.num_words` words.
///
/// # Errors
///
/// Returns the [`Error`] of the first stage that fails.
pub fn run_on_corpus(corpus: &Corpus, config: &Config) -> Result<Vec<String>, Error> {
    let words = corpus.lines();
    let tokenizer = CharTokenizer::from_words(&words, config.sentinel)?;
    info!("vocab size: {}", tokenizer.vocab_size());

    let pairs = TrainingPairs::extract(&words, &tokenizer)?;
    info!("training pairs: {}", pairs.len());

    let mut model = BigramModel::seeded(tokenizer.vocab_size(), config.seed);
    let trainer = Trainer::from_config(&pairs, tokenizer.vocab_size(), config)?;
    trainer.train(&mut model, config.num_iterations)?;

    let mut generator = Generator::from_config(config);
    Ok(generator.generate(config.num_words, &model, &tokenizer)?)
}
