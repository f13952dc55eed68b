//! Crate-level error wrapping every module error, returned by [`run`](crate::run).

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::DataError;
use crate::generator::GenerateError;
use crate::tokenizer::TokenizerError;
use crate::trainer::TrainError;

/// Any failure of the pipeline. Each variant wraps the error of the stage that failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    Train(#[from] TrainError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
