//! Errors produced when loading the word corpus.

use thiserror::Error;

/// Errors produced by the corpus loading module.
///
/// # Variants
///
/// - **Io**: failed to read the file (not found, permission denied, invalid UTF-8).
/// - **EmptyFile**: the file was read but has no lines.
/// - **EmptyWord**: a line was blank after trimming. The corpus format has no blank
///   lines, so this is rejected rather than skipped.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error while reading the input file.
    #[error("data io: {0}")]
    Io(#[from] std::io::Error),

    /// The input file yields no words.
    #[error("data: input file is empty")]
    EmptyFile,

    /// A line was empty after trimming.
    #[error("data: empty line (word) in input")]
    EmptyWord,
}
