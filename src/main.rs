//! # bigram-names
//!
//! Trains a character-level bigram model on a names file (one name per line) and prints
//! newly sampled names, one per line.
//!
//! Configuration comes from `BIGRAM_*` environment variables (see [`bigram_lm::config`]);
//! logging verbosity from `RUST_LOG` (default `info`).

use anyhow::Context;
use bigram_lm::config;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::from_env().context("reading configuration")?;
    config.validate().context("validating configuration")?;
    log::info!(
        "seed {} | {} iterations at lr {} | input {}",
        config.seed,
        config.num_iterations,
        config.learning_rate,
        config.input_path.display()
    );

    let words = bigram_lm::run(&config)
        .with_context(|| format!("bigram pipeline on {}", config.input_path.display()))?;

    log::info!("generated {} names", words.len());
    for word in words {
        println!("{word}");
    }
    Ok(())
}
