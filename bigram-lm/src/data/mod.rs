//! Corpus loading: one word per line from a text file.
//!
//! This module defines the **trait** ([`CorpusLoader`]), **models** ([`Word`], [`Corpus`]), and
//! **error** ([`DataError`]). Implementations (e.g. [`PathLoader`]) are in the `impls` submodule.

mod error;
mod impls;
mod types;

pub use error::DataError;
pub use impls::{load_from_path, PathLoader};
pub use types::{Corpus, Word};

/// Trait for loading a word corpus.
pub trait CorpusLoader {
    /// Loads the corpus. Returns [`Corpus`] or a [`DataError`].
    fn load(&self) -> Result<Corpus, DataError>;
}
