//! Error types for trackml-core.

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for trackml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for resolving a conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// No input files were supplied.
    #[error("no input provided")]
    NoInputs,

    /// The first input's name does not carry a usable event number.
    #[error("cannot derive an event number from '{name}': {source}")]
    MalformedEventNumber {
        name: String,
        #[source]
        source: ParseIntError,
    },
}
