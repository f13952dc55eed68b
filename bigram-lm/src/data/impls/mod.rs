//! Implementations of [`CorpusLoader`](super::CorpusLoader).

mod path;

pub use path::{load_from_path, PathLoader};
