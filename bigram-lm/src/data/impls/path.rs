//! [`CorpusLoader`](super::super::CorpusLoader) that reads a UTF-8 file, one word per line.

use std::fs;
use std::path::Path;

use log::debug;

use super::super::{Corpus, CorpusLoader, DataError, Word};

/// Loads a corpus from a file path (one trimmed word per line; blank lines error).
#[derive(Clone, Debug)]
pub struct PathLoader<P>(pub P);

impl<P> PathLoader<P>
where
    P: AsRef<Path>,
{
    #[must_use]
    pub fn new(path: P) -> Self {
        PathLoader(path)
    }
}

impl<P> CorpusLoader for PathLoader<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Corpus, DataError> {
        let path = self.0.as_ref();
        let content = fs::read_to_string(path)?;
        let words = content
            .lines()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("read {} words from {}", words.len(), path.display());
        Corpus::new(words)
    }
}

/// Convenience: load a corpus from a path using [`PathLoader`].
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read or content is not valid UTF-8.
/// - [`DataError::EmptyWord`] when a line is empty after trimming.
/// - [`DataError::EmptyFile`] when the file has no lines.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Corpus, DataError> {
    PathLoader::new(path).load()
}
